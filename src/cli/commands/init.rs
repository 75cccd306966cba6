//! Implementation of the `couponstore-config init` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::display::{action_success, output, CommandOutput};
use crate::infrastructure::config::{write_template, CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long, short)]
    pub force: bool,

    /// Where to write the template
    #[arg(short, long, env = CONFIG_PATH_VAR, default_value = DEFAULT_CONFIG_PATH)]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub message: String,
    pub path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        format!(
            "{}\nReplace every CHANGE_ME value before starting the server.",
            action_success(&self.message)
        )
    }
}

/// Fails without writing when the target exists and `--force` is not set.
pub fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    write_template(&args.path, args.force)?;

    let output_data = InitOutput {
        message: format!("Configuration template written to {}", args.path.display()),
        path: args.path,
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::TEMPLATE;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_template_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        execute(
            InitArgs {
                force: false,
                path: path.clone(),
            },
            true,
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);

        std::fs::write(&path, "kept").unwrap();
        let err = execute(
            InitArgs {
                force: false,
                path: path.clone(),
            },
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kept");

        execute(
            InitArgs {
                force: true,
                path: path.clone(),
            },
            true,
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }
}
