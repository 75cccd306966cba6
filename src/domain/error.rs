use thiserror::Error;

/// Configuration loading errors.
///
/// Messages reference field names and environment names only. Values read
/// from the source never appear in an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration for environment '{environment}' not found in {origin}")]
    NotFound { environment: String, origin: String },

    #[error("Invalid configuration: {field} {constraint}")]
    Validation { field: String, constraint: String },

    #[error("Configuration source {origin} could not be read: {reason}")]
    Source { origin: String, reason: String },
}

impl ConfigError {
    pub(crate) fn validation(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// The offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the requested environment was absent from the source.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
