//! Coupon store configuration
//!
//! Typed, validated, environment-scoped configuration for the coupon store
//! backend. One [`Configuration`] is loaded at startup and handed to each
//! consumer (HTTP server, database connector, JWT signer, mailer, Correios
//! client), which reads only its own sub-tree.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration types, secret-bearing values
//!   and errors
//! - **Infrastructure Layer** (`infrastructure`): figment-based loading,
//!   validation and logging
//! - **CLI Layer** (`cli`): operator commands
//!
//! # Example
//!
//! ```no_run
//! use couponstore_config::ConfigLoader;
//!
//! fn main() -> Result<(), couponstore_config::ConfigError> {
//!     let config = ConfigLoader::from_env().load_active()?;
//!     println!("listening on port {}", config.port());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    AdminConfig, Configuration, CorreiosConfig, DatabaseConfig, EmailAuth, EmailConfig, JwtConfig,
    PostalCode, Secret, Settings, TokenLifetime,
};
pub use domain::ConfigError;
pub use infrastructure::config::{resolve_environment, ConfigLoader, ConfigSource, ValidationPolicy};
