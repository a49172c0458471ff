//! Service-area routing: distance lookup and serviceability evaluation.

pub mod evaluator;
pub mod provider;

pub use evaluator::{DistanceEvaluator, RejectionReason, RoutingOutcome};
pub use provider::{DistanceLookup, DistanceProvider, LookupError, MatrixClient, MatrixConfig};
