//! Shared types and configuration for Weighbridge.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Configuration management for the reporting pipeline

pub mod config;
pub mod types;

pub use config::AppConfig;
