pub mod config;
pub mod values;

pub use config::{
    AdminConfig, Configuration, CorreiosConfig, DatabaseConfig, EmailAuth, EmailConfig, JwtConfig,
    Settings,
};
pub use values::{is_valid_email, FormatError, PostalCode, Secret, TokenLifetime};
