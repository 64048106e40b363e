//! Configuration loading and TOML write-back
//!
//! TOML config file location follows the platform config directory
//! (`~/.config/casebridge/config.toml` on Linux). Writes go through a
//! temp-file-then-rename sequence so a concurrent reader never observes a
//! partially written file.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Logging configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter ("trace", "debug", "info", "warn", "error")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// TOML configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Salesforce account subdomain (the "acme" in acme.my.salesforce.com)
    pub salesforce_domain: Option<String>,

    /// Full instance URL override (sandboxes); normally derived from the subdomain
    pub instance_url: Option<String>,

    /// Query strategy selection: "saved_view" or "static_category"
    pub query_strategy: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default configuration file path for the platform
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("casebridge").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}

/// Load TOML configuration from an explicit path
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Load TOML configuration, falling back to defaults when the file is absent
pub fn load_or_default(path: &Path) -> Result<TomlConfig> {
    if path.exists() {
        load_toml_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No config file; using defaults");
        Ok(TomlConfig::default())
    }
}

/// Write TOML configuration atomically (temp file + rename)
///
/// On Unix the file is written with 0600 permissions before the rename.
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Serialize TOML failed: {}", e)))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&tmp_path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(&tmp_path, perms)?;
    }

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default_level() {
        assert_eq!(LoggingConfig::default().level, "info");
    }

    #[test]
    fn test_toml_config_parses_partial_file() {
        let parsed: TomlConfig = toml::from_str("salesforce_domain = \"acme\"").unwrap();
        assert_eq!(parsed.salesforce_domain.as_deref(), Some("acme"));
        assert!(parsed.instance_url.is_none());
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_toml_config_parses_logging_section() {
        let parsed: TomlConfig =
            toml::from_str("query_strategy = \"saved_view\"\n\n[logging]\nlevel = \"debug\"")
                .unwrap();
        assert_eq!(parsed.query_strategy.as_deref(), Some("saved_view"));
        assert_eq!(parsed.logging.level, "debug");
    }
}
