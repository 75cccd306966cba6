//! Command-line interface for operators.
//!
//! `check` validates an environment, `list` shows the environments a file
//! declares and `init` writes the configuration template.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};

use crate::domain::ConfigError;
use crate::infrastructure::logging::{LogFormat, SecretScrubber};
use commands::{check::CheckArgs, init::InitArgs, list::ListArgs};

#[derive(Parser, Debug)]
#[command(name = "couponstore-config")]
#[command(about = "Validate and manage coupon store backend configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level for diagnostics written to stderr
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log format for diagnostics written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the configuration of one environment
    Check(CheckArgs),

    /// List the environments declared by a configuration file
    List(ListArgs),

    /// Write the configuration template
    Init(InitArgs),
}

/// Report a failed command and exit with status 1.
///
/// The message is scrubbed of credentials before it is printed.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let scrubber = SecretScrubber::new();
    let message = scrubber.scrub(&format!("{err:#}"));

    if json_mode {
        let config_error = err.downcast_ref::<ConfigError>();
        let payload = serde_json::json!({
            "success": false,
            "error": message,
            "kind": config_error.map(error_kind),
            "field": config_error.and_then(ConfigError::field),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("{}", display::action_failure(&message));
    }

    std::process::exit(1);
}

const fn error_kind(err: &ConfigError) -> &'static str {
    match err {
        ConfigError::NotFound { .. } => "not_found",
        ConfigError::Validation { .. } => "validation",
        ConfigError::Source { .. } => "source",
    }
}
