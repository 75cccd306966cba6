//! Conversion of a raw environment block into validated [`Settings`].
//!
//! Fields are checked in declaration order and the first violation is
//! returned. Constraint messages describe what was expected and never
//! include the value that was found.

use tracing::warn;

use super::policy::{ValidationPolicy, PLACEHOLDER_PREFIX, RECOMMENDED_JWT_SECRET_LEN};
use super::raw::{RawAdmin, RawCorreios, RawDatabase, RawEmail, RawJwt, RawSettings};
use crate::domain::models::{
    is_valid_email, AdminConfig, CorreiosConfig, DatabaseConfig, EmailAuth, EmailConfig, JwtConfig,
    PostalCode, Secret, Settings, TokenLifetime,
};
use crate::domain::ConfigError;

const DEFAULT_SMTP_PORT: u16 = 587;

/// Validate a raw block against the fixed constraints and `policy`.
pub fn validate(raw: RawSettings, policy: &ValidationPolicy) -> Result<Settings, ConfigError> {
    Ok(Settings {
        port: required_port(raw.port, "port")?,
        database: database(raw.database, policy)?,
        jwt: jwt(raw.jwt, policy)?,
        email: email(raw.email, policy)?,
        admin: admin(raw.admin, policy)?,
        correios: correios(raw.correios, policy)?,
    })
}

fn database(raw: RawDatabase, policy: &ValidationPolicy) -> Result<DatabaseConfig, ConfigError> {
    Ok(DatabaseConfig {
        host: required(raw.host, "database.host")?,
        port: required_port(raw.port, "database.port")?,
        database: required(raw.database, "database.database")?,
        username: required(raw.username, "database.username")?,
        password: required_secret(raw.password, "database.password", policy)?,
        dialect: required(raw.dialect, "database.dialect")?,
        logging: raw.logging.unwrap_or(false),
    })
}

fn jwt(raw: RawJwt, policy: &ValidationPolicy) -> Result<JwtConfig, ConfigError> {
    let secret = required_secret(raw.secret, "jwt.secret", policy)?;

    let len = secret.char_len();
    if policy.min_jwt_secret_len > 0 && len < policy.min_jwt_secret_len {
        return Err(ConfigError::validation(
            "jwt.secret",
            format!(
                "must be at least {} characters long",
                policy.min_jwt_secret_len
            ),
        ));
    }
    if len < RECOMMENDED_JWT_SECRET_LEN {
        warn!(
            field = "jwt.secret",
            recommended_len = RECOMMENDED_JWT_SECRET_LEN,
            "weak secret: use a longer random value"
        );
    }

    let expires_in = required(raw.expires_in, "jwt.expiresIn")?
        .parse::<TokenLifetime>()
        .map_err(|e| ConfigError::validation("jwt.expiresIn", e.to_string()))?;

    Ok(JwtConfig { secret, expires_in })
}

fn email(raw: RawEmail, policy: &ValidationPolicy) -> Result<EmailConfig, ConfigError> {
    let enabled = raw.enabled.unwrap_or(true);
    let secure = raw.secure.unwrap_or(false);

    if !enabled {
        let port = match raw.port {
            Some(port) => port_in_range(port, "email.port")?,
            None => DEFAULT_SMTP_PORT,
        };
        return Ok(EmailConfig {
            enabled,
            host: raw.host.unwrap_or_default(),
            port,
            secure,
            auth: EmailAuth {
                user: raw.auth.user.unwrap_or_default(),
                pass: Secret::new(raw.auth.pass.unwrap_or_default()),
            },
        });
    }

    Ok(EmailConfig {
        enabled,
        host: required(raw.host, "email.host")?,
        port: required_port(raw.port, "email.port")?,
        secure,
        auth: EmailAuth {
            user: required(raw.auth.user, "email.auth.user")?,
            pass: required_secret(raw.auth.pass, "email.auth.pass", policy)?,
        },
    })
}

fn admin(raw: RawAdmin, policy: &ValidationPolicy) -> Result<AdminConfig, ConfigError> {
    let email = required(raw.email, "admin.email")?;
    if !is_valid_email(&email) {
        return Err(ConfigError::validation(
            "admin.email",
            "must be a valid email address",
        ));
    }

    Ok(AdminConfig {
        email,
        password: required_secret(raw.password, "admin.password", policy)?,
    })
}

fn correios(raw: RawCorreios, policy: &ValidationPolicy) -> Result<CorreiosConfig, ConfigError> {
    let senha = optional_secret(raw.senha, "correios.senha", policy)?;
    let token = optional_secret(raw.token, "correios.token", policy)?;

    let cep_origem = match raw.cep_origem.filter(|cep| !cep.trim().is_empty()) {
        Some(cep) => Some(
            cep.parse::<PostalCode>()
                .map_err(|e| ConfigError::validation("correios.cepOrigem", e.to_string()))?,
        ),
        None if policy.require_cep_origem => {
            return Err(ConfigError::validation("correios.cepOrigem", "is required"));
        }
        None => None,
    };

    Ok(CorreiosConfig {
        empresa: raw.empresa.unwrap_or_default(),
        senha,
        token,
        cep_origem,
    })
}

fn required(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(ConfigError::validation(field, "must not be empty")),
        None => Err(ConfigError::validation(field, "is required")),
    }
}

fn required_secret(
    value: Option<String>,
    field: &str,
    policy: &ValidationPolicy,
) -> Result<Secret, ConfigError> {
    let secret = Secret::new(required(value, field)?);
    check_placeholder(&secret, field, policy)?;
    Ok(secret)
}

fn optional_secret(
    value: Option<String>,
    field: &str,
    policy: &ValidationPolicy,
) -> Result<Secret, ConfigError> {
    let secret = Secret::new(value.unwrap_or_default());
    check_placeholder(&secret, field, policy)?;
    Ok(secret)
}

fn check_placeholder(
    secret: &Secret,
    field: &str,
    policy: &ValidationPolicy,
) -> Result<(), ConfigError> {
    if policy.reject_placeholders && secret.expose().trim().starts_with(PLACEHOLDER_PREFIX) {
        return Err(ConfigError::validation(
            field,
            "still holds the template placeholder",
        ));
    }
    Ok(())
}

fn required_port(value: Option<i64>, field: &str) -> Result<u16, ConfigError> {
    value.map_or_else(
        || Err(ConfigError::validation(field, "is required")),
        |port| port_in_range(port, field),
    )
}

fn port_in_range(port: i64, field: &str) -> Result<u16, ConfigError> {
    u16::try_from(port)
        .ok()
        .filter(|port| *port >= 1)
        .ok_or_else(|| ConfigError::validation(field, "must be between 1 and 65535"))
}
