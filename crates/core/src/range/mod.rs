//! Symbolic date filters resolved to concrete UTC instant ranges.
//!
//! A caller-facing filter token ("this week", "last month", "custom") plus
//! a named timezone becomes an inclusive-inclusive `[start_utc, end_utc]`
//! pair suitable for range queries against persisted UTC timestamps.

pub mod error;
pub mod resolver;
pub mod types;


pub use error::RangeError;
pub use resolver::DateRangeResolver;
pub use types::{DateFilter, ResolvedRange};
