//! Core reporting pipeline for Weighbridge.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Persistence is consumed through repository traits; the
//! surrounding HTTP layer is a collaborator, not a concern of this crate.
//!
//! # Modules
//!
//! - `timezone` - Fixed-offset table for named business timezones
//! - `range` - Symbolic date filters resolved to UTC instant ranges
//! - `fact` - Immutable financial records and repository traits
//! - `aggregate` - Organization-scoped decimal aggregation
//! - `report` - Report bundle assembly and amount formatting
//! - `render` - CSV and PDF output with failure containment
//! - `pipeline` - End-to-end report service

pub mod aggregate;
pub mod fact;
pub mod pipeline;
pub mod range;
pub mod render;
pub mod report;
pub mod timezone;
