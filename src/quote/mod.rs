//! Quote engine module.
//!
//! Pure pricing math plus the HTTP surface that orchestrates it with the
//! distance evaluator.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_quote, round_money, QuoteBreakdown};
pub use routes::router;
