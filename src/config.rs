//! Site configuration module.
//!
//! Handles loading and validating `shiori.toml`. All settings are optional
//! — the file itself may be absent — and the CLI's `--root` flag overrides
//! the configured content root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"   # Path to the content directory
//! lesson_extension = "mdx"   # Lesson document extension, no leading dot
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Name of the config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "shiori.toml";

/// Site configuration loaded from `shiori.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the content root directory.
    pub content_root: String,
    /// Lesson document extension, without the leading dot.
    pub lesson_extension: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: "content".to_string(),
            lesson_extension: "mdx".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.is_empty() {
            return Err(ConfigError::Validation(
                "content_root must not be empty".into(),
            ));
        }
        if self.lesson_extension.is_empty() {
            return Err(ConfigError::Validation(
                "lesson_extension must not be empty".into(),
            ));
        }
        if self.lesson_extension.contains(['.', '/']) {
            return Err(ConfigError::Validation(
                "lesson_extension must be a bare extension like \"mdx\"".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `shiori.toml` in the given directory.
///
/// Returns defaults when the file doesn't exist; rejects unknown keys and
/// validates the result when it does.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(SiteConfig::default()),
        Err(err) => return Err(err.into()),
    };
    let config: SiteConfig = toml::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `shiori.toml` with all keys documented.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Shiori Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.

# Path to the content root directory. The expected layout is
#   <content_root>/<language>/<course>/descriptor.json
#   <content_root>/<language>/<course>/<chapter>/descriptor.json
#   <content_root>/<language>/<course>/<chapter>/<lesson>.mdx
content_root = "content"

# Lesson document extension, without the leading dot.
lesson_extension = "mdx"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "content_root = \"courses\"\nlesson_extension = \"md\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.content_root, "courses");
        assert_eq!(config.lesson_extension, "md");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "content_root = \"courses\"\n").unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.lesson_extension, "mdx");
    }

    #[test]
    fn unknown_key_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "content_dir = \"x\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "content_root = [broken\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let config = SiteConfig {
            lesson_extension: ".mdx".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_content_root_is_rejected() {
        let config = SiteConfig {
            content_root: String::new(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn stock_config_matches_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }
}
