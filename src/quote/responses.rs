//! Response DTOs for the quote API.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::quote::calculators::QuoteBreakdown;
use crate::routing::{RejectionReason, RoutingOutcome};

/// Successful quote: the estimate range plus its itemization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub min_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_price: Decimal,
    pub breakdown: BreakdownResponse,
    pub routing: RoutingResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub material_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub travel_surcharge: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResponse {
    /// Rounded to whole km for display
    pub distance_km: i64,
    pub duration_label: String,
}

impl QuoteResponse {
    pub fn new(breakdown: QuoteBreakdown, outcome: &RoutingOutcome) -> Self {
        Self {
            min_price: breakdown.min_price,
            max_price: breakdown.max_price,
            breakdown: BreakdownResponse {
                base_price: breakdown.base_price,
                material_surcharge: breakdown.material_surcharge,
                travel_surcharge: breakdown.travel_surcharge,
            },
            routing: RoutingResponse {
                distance_km: outcome.distance_km.round() as i64,
                duration_label: outcome.duration_label.clone(),
            },
        }
    }
}

/// Business-rule rejection (out of service area). Carries the measured
/// distance so the frontend can explain the decision.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionResponse {
    pub rejected: bool,
    pub reason: RejectionReason,
    pub distance_km: i64,
    pub message: String,
}

impl RejectionResponse {
    pub fn out_of_service_area(outcome: &RoutingOutcome, max_km: f64) -> Self {
        Self {
            rejected: true,
            reason: RejectionReason::OutOfServiceArea,
            distance_km: outcome.distance_km.round() as i64,
            message: format!(
                "This address is about {} km away; we currently serve locations within {} km.",
                outcome.distance_km.round() as i64,
                max_km as i64
            ),
        }
    }
}

/// Oversized properties are quoted by a human instead.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualReviewResponse {
    pub requires_manual_review: bool,
    pub message: String,
}

impl ManualReviewResponse {
    pub fn for_sqft(square_feet: u32) -> Self {
        Self {
            requires_manual_review: true,
            message: format!(
                "Properties around {} sq ft need an in-person estimate; we'll follow up to schedule one.",
                square_feet
            ),
        }
    }
}
