use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

/// The distributed configuration template.
///
/// Operators copy it to `config/config.yaml` and replace every
/// `CHANGE_ME` value before the first start.
pub const TEMPLATE: &str = include_str!("../../../config/config.example.yaml");

/// Write the template to `path`, creating parent directories.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite it",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, TEMPLATE)
        .with_context(|| format!("Failed to write template to {}", path.display()))?;

    info!(path = %path.display(), "configuration template written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::{ConfigLoader, ValidationPolicy};
    use tempfile::TempDir;

    #[test]
    fn test_template_loads_for_development() {
        let config = ConfigLoader::from_yaml_str(TEMPLATE)
            .load("development")
            .expect("template should validate under the development policy");

        assert_eq!(config.port(), 3000);
        assert_eq!(config.database().dialect, "postgres");
        assert_eq!(config.jwt().expires_in.as_str(), "7d");
        assert_eq!(
            config.correios().cep_origem.as_ref().map(|c| c.as_str()),
            Some("01310-100")
        );
    }

    #[test]
    fn test_template_placeholders_fail_strict_policy() {
        let err = ConfigLoader::from_yaml_str(TEMPLATE)
            .with_policy(ValidationPolicy::strict())
            .load("development")
            .unwrap_err();
        assert_eq!(err.field(), Some("database.password"));
    }

    #[test]
    fn test_write_template_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("config.yaml");

        write_template(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);

        fs::write(&path, "edited").unwrap();
        assert!(write_template(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "edited");

        write_template(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
    }
}
