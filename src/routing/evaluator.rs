//! Serviceability evaluation against the business origin.
//!
//! Turns a free-text destination address into an in-service/out-of-service
//! decision plus a travel surcharge. Business conditions (bad address,
//! too far, provider down) are outcome values, never errors: the caller
//! always gets a structured [`RoutingOutcome`].

use std::sync::Arc;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::QuoteConfig;
use crate::quote::round_money;
use crate::routing::provider::{DistanceProvider, LookupError};

/// Why a location was not quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    None,
    OutOfServiceArea,
    InvalidAddress,
    ProviderError,
}

/// Result of evaluating one destination.
#[derive(Debug, Clone)]
pub struct RoutingOutcome {
    /// Driving distance, km, >= 0
    pub distance_km: f64,
    /// Human-readable travel time ("7 min", "1 hr 5 min")
    pub duration_label: String,
    /// Monetary add-on for the drive, rounded to cents
    pub travel_surcharge: Decimal,
    pub serviceable: bool,
    pub rejection: RejectionReason,
}

impl RoutingOutcome {
    fn rejected(rejection: RejectionReason) -> Self {
        Self {
            distance_km: 0.0,
            duration_label: String::new(),
            travel_surcharge: Decimal::ZERO,
            serviceable: false,
            rejection,
        }
    }
}

/// Classifies a destination as in-service (with an optional travel
/// surcharge) or out-of-service. One provider call per evaluation, no
/// retries; the provider client owns the timeout.
pub struct DistanceEvaluator {
    config: Arc<QuoteConfig>,
    provider: Arc<dyn DistanceProvider>,
}

impl DistanceEvaluator {
    pub fn new(config: Arc<QuoteConfig>, provider: Arc<dyn DistanceProvider>) -> Self {
        Self { config, provider }
    }

    pub async fn evaluate(&self, destination: &str) -> RoutingOutcome {
        let destination = destination.trim();
        if destination.is_empty() {
            return RoutingOutcome::rejected(RejectionReason::InvalidAddress);
        }

        let lookup = match self
            .provider
            .lookup(&self.config.origin_address, destination)
            .await
        {
            Ok(lookup) => lookup,
            Err(LookupError::NotFound) => {
                tracing::info!(destination, "destination did not resolve");
                return RoutingOutcome::rejected(RejectionReason::InvalidAddress);
            }
            Err(LookupError::Provider(msg)) => {
                tracing::warn!(destination, error = %msg, "distance lookup failed");
                return RoutingOutcome::rejected(RejectionReason::ProviderError);
            }
        };

        let distance_km = (lookup.distance_meters / 1000.0).max(0.0);
        let minutes = (lookup.duration_seconds / 60.0).round().max(0.0) as i64;
        let duration_label = format_duration(minutes);

        // Rejection takes priority over any surcharge math.
        if distance_km > self.config.max_service_distance_km {
            return RoutingOutcome {
                distance_km,
                duration_label,
                travel_surcharge: Decimal::ZERO,
                serviceable: false,
                rejection: RejectionReason::OutOfServiceArea,
            };
        }

        let extra_km = (distance_km - self.config.surcharge_threshold_km).max(0.0);
        let travel_surcharge = round_money(
            Decimal::from_f64(extra_km).unwrap_or(Decimal::ZERO)
                * self.config.surcharge_rate_per_km,
            2,
        );

        RoutingOutcome {
            distance_km,
            duration_label,
            travel_surcharge,
            serviceable: true,
            rejection: RejectionReason::None,
        }
    }
}

/// Formats whole minutes the way the estimate page displays them.
fn format_duration(minutes: i64) -> String {
    if minutes >= 60 {
        format!("{} hr {} min", minutes / 60, minutes % 60)
    } else {
        format!("{} min", minutes)
    }
}
