use std::fmt;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Yaml};
use figment::{error::Kind, Figment, Profile, Provider};
use tracing::{debug, info, instrument};

use super::policy::ValidationPolicy;
use super::raw::RawSettings;
use super::validation::validate;
use crate::domain::models::Configuration;
use crate::domain::ConfigError;

/// Environment variable selecting the active environment.
pub const ENVIRONMENT_VAR: &str = "COUPONSTORE_ENV";

/// Environment variable pointing at the configuration file.
pub const CONFIG_PATH_VAR: &str = "COUPONSTORE_CONFIG";

/// Prefix of per-field override variables, e.g. `COUPONSTORE_DATABASE__PASSWORD`.
pub const OVERRIDE_PREFIX: &str = "COUPONSTORE_";

/// Environment used when [`ENVIRONMENT_VAR`] is unset or blank.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Configuration file used when [`CONFIG_PATH_VAR`] is unset or blank.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Where the configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// YAML or JSON file, chosen by extension (`.json` is JSON, anything
    /// else YAML).
    File(PathBuf),
    /// In-memory YAML document.
    Yaml(String),
    /// In-memory JSON document.
    Json(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Yaml(_) => f.write_str("<inline yaml>"),
            Self::Json(_) => f.write_str("<inline json>"),
        }
    }
}

/// Resolve the active environment name from [`ENVIRONMENT_VAR`].
pub fn resolve_environment() -> String {
    std::env::var(ENVIRONMENT_VAR)
        .ok()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// Resolve the configuration file path from [`CONFIG_PATH_VAR`].
pub fn resolve_config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR)
        .filter(|path| !path.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Loads one environment block from a source, applies overrides and
/// validates it.
///
/// Precedence (lowest to highest):
/// 1. The `default` block of the source, shared by all environments
/// 2. The selected environment block
/// 3. `COUPONSTORE_*` environment variables, when overrides are enabled
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: ConfigSource,
    policy: Option<ValidationPolicy>,
    env_overrides: bool,
}

impl ConfigLoader {
    /// Loader over an explicit source, without environment overrides.
    pub const fn new(source: ConfigSource) -> Self {
        Self {
            source,
            policy: None,
            env_overrides: false,
        }
    }

    /// Loader over a YAML or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::new(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Loader over an in-memory YAML document.
    pub fn from_yaml_str(yaml: impl Into<String>) -> Self {
        Self::new(ConfigSource::Yaml(yaml.into()))
    }

    /// Loader over an in-memory JSON document.
    pub fn from_json_str(json: impl Into<String>) -> Self {
        Self::new(ConfigSource::Json(json.into()))
    }

    /// Loader the server uses at startup: the file named by
    /// [`CONFIG_PATH_VAR`] with environment overrides enabled.
    pub fn from_env() -> Self {
        Self::from_file(resolve_config_path()).with_env_overrides(true)
    }

    /// Validate with `policy` instead of the per-environment default.
    #[must_use]
    pub const fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Enable or disable `COUPONSTORE_*` overrides.
    #[must_use]
    pub const fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    /// The source this loader reads.
    pub const fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Environment names declared by the source, sorted.
    pub fn environments(&self) -> Result<Vec<String>, ConfigError> {
        let figment = self.figment()?;
        let data = figment.data().map_err(|e| self.source_error(&e))?;

        let mut names: Vec<String> = data
            .keys()
            .filter(|profile| is_selectable(profile))
            .map(|profile| profile.as_str().as_str().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Load the environment named by [`ENVIRONMENT_VAR`].
    pub fn load_active(&self) -> Result<Configuration, ConfigError> {
        self.load(&resolve_environment())
    }

    /// Load and validate the block for `environment`.
    ///
    /// Fails with [`ConfigError::NotFound`] when the source has no such
    /// block and with [`ConfigError::Validation`] on the first field that
    /// violates its constraint.
    #[instrument(skip(self), fields(source = %self.source))]
    pub fn load(&self, environment: &str) -> Result<Configuration, ConfigError> {
        let figment = self.figment()?;
        let data = figment.data().map_err(|e| self.source_error(&e))?;

        let profile = Profile::new(environment);
        if !is_selectable(&profile) || !data.contains_key(&profile) {
            return Err(ConfigError::NotFound {
                environment: environment.to_string(),
                origin: self.source.to_string(),
            });
        }
        debug!(
            shared_defaults = data.contains_key(&Profile::Default),
            env_overrides = self.env_overrides,
            "environment block found"
        );

        let raw: RawSettings = figment
            .select(profile)
            .extract()
            .map_err(|e| extraction_error(&e))?;

        let policy = self
            .policy
            .unwrap_or_else(|| ValidationPolicy::for_environment(environment));
        let settings = validate(raw, &policy)?;

        info!(environment, "configuration loaded");
        Ok(Configuration::new(environment.to_string(), settings))
    }

    fn figment(&self) -> Result<Figment, ConfigError> {
        let figment = match &self.source {
            ConfigSource::File(path) => {
                if !path.is_file() {
                    return Err(ConfigError::Source {
                        origin: self.source.to_string(),
                        reason: "file does not exist".to_string(),
                    });
                }
                if path.extension().is_some_and(|ext| ext == "json") {
                    Figment::from(Json::file(path).nested())
                } else {
                    Figment::from(Yaml::file(path).nested())
                }
            }
            ConfigSource::Yaml(yaml) => Figment::from(Yaml::string(yaml).nested()),
            ConfigSource::Json(json) => Figment::from(Json::string(json).nested()),
        };

        if !self.env_overrides {
            return Ok(figment);
        }

        Ok(figment.merge(
            Env::prefixed(OVERRIDE_PREFIX)
                .ignore(&["ENV", "CONFIG"])
                .split("__")
                .lowercase(false)
                .map(|key| override_key(key.as_str()).into())
                .global(),
        ))
    }

    fn source_error(&self, error: &figment::Error) -> ConfigError {
        ConfigError::Source {
            origin: self.source.to_string(),
            reason: error.to_string(),
        }
    }
}

/// `default` and `global` are layering profiles, never environments.
fn is_selectable(profile: &Profile) -> bool {
    *profile != Profile::Default && *profile != Profile::Global
}

/// Case an override key the way the source spells it.
///
/// Variable names carry no case, but profile dictionaries are case-sensitive:
/// `jwt.expiresin` next to the file's `jwt.expiresIn` would be two fields.
fn override_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    match key.as_str() {
        "jwt.expiresin" | "jwt.expires_in" => "jwt.expiresIn".to_string(),
        "correios.ceporigem" | "correios.cep_origem" => "correios.cepOrigem".to_string(),
        _ => key,
    }
}

/// Rewrite a deserialization error so it names the field but not the value.
fn extraction_error(error: &figment::Error) -> ConfigError {
    let mut path = error.path.clone();
    let constraint = match &error.kind {
        Kind::Message(message) => message.clone(),
        Kind::InvalidType(_, expected) | Kind::InvalidValue(_, expected) => {
            format!("expected {expected}")
        }
        Kind::MissingField(name) => format!("field '{name}' is required"),
        Kind::DuplicateField(name) => {
            path.push((*name).to_string());
            "is set more than once".to_string()
        }
        Kind::UnknownField(name, _) => {
            path.push(name.clone());
            "is not a recognized setting".to_string()
        }
        _ => "has an invalid value".to_string(),
    };

    let field = if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    };

    ConfigError::validation(field, constraint)
}
