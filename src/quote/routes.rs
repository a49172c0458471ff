//! Quote API routes and orchestration.
//!
//! The handler owns the request flow: field validation first, then the
//! manual-review size gate, then the distance evaluator (which can
//! short-circuit with a rejection), and only then the pure calculator.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::quote::calculators::compute_quote;
use crate::quote::requests::QuoteRequest;
use crate::quote::responses::{ManualReviewResponse, QuoteResponse, RejectionResponse};
use crate::routing::RejectionReason;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quote", post(create_quote))
        .route("/healthz", get(health))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Instant-quote endpoint for the estimate form.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Response> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(missing.join(", ")));
    }

    // Oversized jobs skip automated pricing entirely.
    if request.square_feet > state.config.manual_review_sqft {
        tracing::info!(square_feet = request.square_feet, "quote routed to manual review");
        return Ok(Json(ManualReviewResponse::for_sqft(request.square_feet)).into_response());
    }

    let outcome = state.evaluator.evaluate(&request.address).await;

    if !outcome.serviceable {
        return match outcome.rejection {
            RejectionReason::OutOfServiceArea => {
                tracing::info!(
                    distance_km = outcome.distance_km,
                    "quote rejected: out of service area"
                );
                Ok(Json(RejectionResponse::out_of_service_area(
                    &outcome,
                    state.config.max_service_distance_km,
                ))
                .into_response())
            }
            RejectionReason::InvalidAddress => Err(AppError::InvalidAddress),
            RejectionReason::ProviderError | RejectionReason::None => {
                Err(AppError::RoutingUnavailable)
            }
        };
    }

    let material = request.material.as_deref().unwrap_or("");
    let breakdown = compute_quote(
        request.story_count,
        material,
        outcome.travel_surcharge,
        &state.config,
    );

    tracing::info!(
        distance_km = outcome.distance_km,
        min = %breakdown.min_price,
        max = %breakdown.max_price,
        "quote computed"
    );

    Ok(Json(QuoteResponse::new(breakdown, &outcome)).into_response())
}
