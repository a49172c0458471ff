//! Backend for the Clearview Pressure Washing website.
//!
//! The only real business logic is the instant-quote engine: a distance
//! evaluator that checks whether an address is inside our service area
//! (and prices the drive), and a pure quote calculator that turns property
//! attributes into a min/max estimate. Everything else is plumbing.

pub mod config;
pub mod error;
pub mod quote;
pub mod routing;

use std::sync::Arc;

use crate::config::QuoteConfig;
use crate::routing::DistanceEvaluator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Pricing knobs, loaded once at startup and read-only thereafter
    pub config: Arc<QuoteConfig>,
    /// Serviceability + travel surcharge evaluation
    pub evaluator: Arc<DistanceEvaluator>,
}
