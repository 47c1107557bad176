//! Organization-scoped aggregation over weighment and expense facts.
//!
//! All monetary sums use exact decimal arithmetic. Aggregation is
//! read-only and sees the complete fact set for the range; any render-time
//! cap is the caller's concern.

pub mod error;
pub mod service;
pub mod types;


pub use error::AggregateError;
pub use service::FactAggregator;
pub use types::{AggregateOutcome, KindTotals, MaterialBucket, MonthBucket};
