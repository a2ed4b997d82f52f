//! CLI configuration: display preferences and the session prompt.
//!
//! Loaded from `$XDG_CONFIG_HOME/bookstall/config.toml` (or
//! `~/.config/bookstall/config.toml`), overridable with `--config` or the
//! `BOOKSTALL_CONFIG` environment variable. A missing file means defaults;
//! a malformed file is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct BookstallConfig {
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub session: SessionSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Currency symbol shown before prices
    pub currency: String,
    /// Default inventory listing format
    pub format: DisplayFormat,
    /// Colorize output when stdout is a terminal
    pub color: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            format: DisplayFormat::Table,
            color: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    #[default]
    Table,
    Plain,
}

impl DisplayFormat {
    pub fn as_output(self) -> OutputFormat {
        match self {
            Self::Table => OutputFormat::Table,
            Self::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Prompt shown in interactive mode
    pub prompt: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            prompt: "bookstall".to_string(),
        }
    }
}

/// Load the config, falling back to defaults when no file exists.
pub fn load(path_override: Option<&str>) -> anyhow::Result<BookstallConfig> {
    if let Some(path) = path_override {
        return read_config(Path::new(path));
    }

    let path = default_config_path()?;
    if path.exists() {
        read_config(&path)
    } else {
        Ok(BookstallConfig::default())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<BookstallConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("bookstall"));
        }
    }
    Ok(home_dir()?.join(".config").join("bookstall"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BookstallConfig::default();
        assert_eq!(config.display.currency, "$");
        assert_eq!(config.display.format, DisplayFormat::Table);
        assert!(config.display.color);
        assert_eq!(config.session.prompt, "bookstall");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: BookstallConfig = toml::from_str(
            r#"
            [display]
            currency = "€"
            format = "plain"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.display.currency, "€");
        assert_eq!(config.display.format, DisplayFormat::Plain);
        // Unspecified fields keep their defaults.
        assert!(config.display.color);
        assert_eq!(config.session.prompt, "bookstall");
    }

    #[test]
    fn test_parse_invalid_format_fails() {
        let result: Result<BookstallConfig, _> = toml::from_str("[display]\nformat = \"fancy\"\n");
        assert!(result.is_err());
    }
}
