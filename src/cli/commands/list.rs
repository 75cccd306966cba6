//! Implementation of the `couponstore-config list` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::display::{list_table, output, render_list, CommandOutput};
use crate::infrastructure::config::{
    resolve_environment, ConfigLoader, CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH,
};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, env = CONFIG_PATH_VAR, default_value = DEFAULT_CONFIG_PATH)]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub source: String,
    pub active: String,
    pub environments: Vec<String>,
}

impl CommandOutput for ListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["name", "active"]);
        for name in &self.environments {
            let active = if name.eq_ignore_ascii_case(&self.active) { "*" } else { "" };
            table.add_row(vec![name.as_str(), active]);
        }
        render_list("environment", &table, self.environments.len())
    }
}

pub fn execute(args: ListArgs, json_mode: bool) -> Result<()> {
    let loader = ConfigLoader::from_file(&args.file);
    let environments = loader.environments()?;

    let output_data = ListOutput {
        source: loader.source().to_string(),
        active: resolve_environment(),
        environments,
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_marks_active_environment() {
        colored::control::set_override(false);
        let output_data = ListOutput {
            source: "config/config.yaml".to_string(),
            active: "production".to_string(),
            environments: vec!["development".to_string(), "production".to_string()],
        };

        let human = output_data.to_human();
        let production_line = human
            .lines()
            .find(|line| line.contains("production"))
            .expect("production row");
        assert!(production_line.contains('*'));

        let json = output_data.to_json();
        assert_eq!(json["active"], "production");
        assert_eq!(json["environments"].as_array().map(Vec::len), Some(2));
    }
}
