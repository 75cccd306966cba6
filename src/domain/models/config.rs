use serde::{Serialize, Serializer};

use super::values::{PostalCode, Secret, TokenLifetime};

/// Validated configuration for one environment.
///
/// Only the loader constructs this type. Consumers receive it by reference
/// (or behind an `Arc`) and read one sub-tree each; nothing can mutate it
/// after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    environment: String,
    #[serde(flatten)]
    settings: Settings,
}

impl Configuration {
    pub(crate) const fn new(environment: String, settings: Settings) -> Self {
        Self {
            environment,
            settings,
        }
    }

    /// Name of the environment this configuration was loaded for.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// HTTP server port.
    pub const fn port(&self) -> u16 {
        self.settings.port
    }

    /// Database connection settings.
    pub const fn database(&self) -> &DatabaseConfig {
        &self.settings.database
    }

    /// JWT signing settings.
    pub const fn jwt(&self) -> &JwtConfig {
        &self.settings.jwt
    }

    /// Outgoing email (SMTP) settings.
    pub const fn email(&self) -> &EmailConfig {
        &self.settings.email
    }

    /// Administrator bootstrap credentials.
    pub const fn admin(&self) -> &AdminConfig {
        &self.settings.admin
    }

    /// Correios shipping integration settings.
    pub const fn correios(&self) -> &CorreiosConfig {
        &self.settings.correios
    }

    /// All settings of the environment.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Settings block of a single environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// HTTP server port (1-65535)
    pub port: u16,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Email configuration
    pub email: EmailConfig,

    /// Administrator bootstrap account
    pub admin: AdminConfig,

    /// Correios shipping integration
    pub correios: CorreiosConfig,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// Database server host
    pub host: String,

    /// Database server port (1-65535)
    pub port: u16,

    /// Database name
    pub database: String,

    /// Login user
    pub username: String,

    /// Login password
    pub password: Secret,

    /// Database engine identifier, e.g. `postgres`
    pub dialect: String,

    /// Whether SQL statements are logged
    pub logging: bool,
}

/// JWT configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtConfig {
    /// HMAC signing secret
    pub secret: Secret,

    /// Issued token lifetime
    pub expires_in: TokenLifetime,
}

/// Email configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    /// Whether outgoing email is enabled; when false the remaining fields
    /// are not required
    pub enabled: bool,

    /// SMTP host
    pub host: String,

    /// SMTP port (1-65535)
    pub port: u16,

    /// Use implicit TLS
    pub secure: bool,

    /// SMTP credentials
    pub auth: EmailAuth,
}

/// SMTP credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAuth {
    /// SMTP login
    pub user: String,

    /// SMTP password
    pub pass: Secret,
}

/// Administrator bootstrap account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    /// Administrator email address
    pub email: String,

    /// Administrator initial password
    pub password: Secret,
}

/// Correios shipping integration. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorreiosConfig {
    /// Contract company code
    pub empresa: String,

    /// Contract password
    pub senha: Secret,

    /// API token
    pub token: Secret,

    /// Origin postal code for shipping quotes. A blank source value is
    /// `None` and serializes back as `""`.
    #[serde(serialize_with = "postal_code_or_empty")]
    pub cep_origem: Option<PostalCode>,
}

fn postal_code_or_empty<S: Serializer>(
    cep: &Option<PostalCode>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(cep.as_ref().map_or("", PostalCode::as_str))
}

impl CorreiosConfig {
    /// Whether any credential for the integration has been provided.
    pub fn has_credentials(&self) -> bool {
        !self.empresa.trim().is_empty() || !self.senha.is_blank() || !self.token.is_blank()
    }
}
