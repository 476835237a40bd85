//! AWS-oriented adapters and handlers for the listing search service.
//!
//! This crate owns runtime integration details (Lambda handler, object-store
//! catalog access, environment configuration and log setup) and delegates
//! every search to `storage_search_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod telemetry;
