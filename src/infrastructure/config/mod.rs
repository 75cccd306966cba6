//! Configuration management infrastructure
//!
//! Environment-scoped configuration using figment:
//! - Nested YAML/JSON sources keyed by environment name
//! - Shared `default` block and environment variable overrides
//! - Fail-fast validation into typed, immutable settings

pub mod loader;
pub mod policy;
mod raw;
pub mod template;
mod validation;

pub use loader::{
    resolve_config_path, resolve_environment, ConfigLoader, ConfigSource, CONFIG_PATH_VAR,
    DEFAULT_CONFIG_PATH, DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR, OVERRIDE_PREFIX,
};
pub use policy::ValidationPolicy;
pub use template::{write_template, TEMPLATE};
