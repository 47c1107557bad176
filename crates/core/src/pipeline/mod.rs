//! End-to-end report service.
//!
//! Wires the stages strictly in order: resolve range, aggregate, compile,
//! render. Validation failures fire before any I/O; each request owns its
//! own range, bundle, and (for PDF) engine instance, so concurrent
//! requests share nothing mutable.

pub mod error;
pub mod service;


pub use error::ReportError;
pub use service::{ReportRequest, ReportService, ReportSummary};
