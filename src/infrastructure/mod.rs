//! Infrastructure layer module
//!
//! Adapters around the domain types:
//! - Configuration loading and validation
//! - Logging infrastructure

pub mod config;
pub mod logging;
