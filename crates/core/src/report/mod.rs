//! Report bundle assembly and amount formatting.

pub mod compiler;
pub mod format;
pub mod types;

#[cfg(test)]
mod tests;

pub use compiler::ReportCompiler;
pub use format::format_amount_short;
pub use types::{ReportBundle, ReportKind};
