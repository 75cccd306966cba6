//! Implementation of the `couponstore-config check` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::display::{action_success, output, CommandOutput, DetailView};
use crate::domain::models::{Configuration, Secret};
use crate::infrastructure::config::{
    ConfigLoader, ValidationPolicy, CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH, DEFAULT_ENVIRONMENT,
    ENVIRONMENT_VAR,
};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Environment to validate
    #[arg(short, long, env = ENVIRONMENT_VAR, default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, env = CONFIG_PATH_VAR, default_value = DEFAULT_CONFIG_PATH)]
    pub file: PathBuf,

    /// Apply the production policy regardless of the environment name
    #[arg(long)]
    pub strict: bool,

    /// Fail when correios.cepOrigem is empty
    #[arg(long)]
    pub require_cep_origem: bool,

    /// Ignore COUPONSTORE_* override variables
    #[arg(long)]
    pub no_env_overrides: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    pub valid: bool,
    pub source: String,
    pub configuration: &'a Configuration,
}

impl CommandOutput for CheckOutput<'_> {
    fn to_human(&self) -> String {
        let config = self.configuration;
        let db = config.database();
        let jwt = config.jwt();
        let email = config.email();
        let correios = config.correios();

        let view = DetailView::new(&format!("{} ({})", config.environment(), self.source))
            .field("Port", &config.port().to_string())
            .section("Database")
            .field("Host", &format!("{}:{}", db.host, db.port))
            .field("Database", &db.database)
            .field("Username", &db.username)
            .field("Password", secret_state(&db.password))
            .field("Dialect", &db.dialect)
            .field("Logging", &db.logging.to_string())
            .section("JWT")
            .field("Secret", secret_state(&jwt.secret))
            .field("Expires in", jwt.expires_in.as_str())
            .section("Email");

        let view = if email.enabled {
            view.field("Host", &format!("{}:{}", email.host, email.port))
                .field("Secure", &email.secure.to_string())
                .field("User", &email.auth.user)
                .field("Password", secret_state(&email.auth.pass))
        } else {
            view.field("Enabled", "false")
        };

        let view = view
            .section("Admin")
            .field("Email", &config.admin().email)
            .field("Password", secret_state(&config.admin().password))
            .section("Correios")
            .field("Credentials", if correios.has_credentials() { "set" } else { "empty" })
            .field_opt(
                "Origin CEP",
                correios.cep_origem.as_ref().map(|cep| cep.as_str()),
            );

        format!(
            "{}\n\n{}",
            action_success(&format!(
                "Configuration for '{}' is valid",
                config.environment()
            )),
            view.render()
        )
    }
}

fn secret_state(secret: &Secret) -> &'static str {
    if secret.is_blank() {
        "(empty)"
    } else {
        "[REDACTED]"
    }
}

pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let policy = if args.strict {
        ValidationPolicy::strict()
    } else {
        ValidationPolicy::for_environment(&args.env)
    };
    let policy =
        policy.with_required_cep_origem(policy.require_cep_origem || args.require_cep_origem);

    let loader = ConfigLoader::from_file(&args.file)
        .with_policy(policy)
        .with_env_overrides(!args.no_env_overrides);
    let configuration = loader.load(&args.env)?;

    let output_data = CheckOutput {
        valid: true,
        source: loader.source().to_string(),
        configuration: &configuration,
    };
    output(&output_data, json_mode);
    Ok(())
}
