//! Domain layer for the coupon store configuration
//!
//! Typed configuration values and the errors raised while producing them.

pub mod error;
pub mod models;

pub use error::ConfigError;
