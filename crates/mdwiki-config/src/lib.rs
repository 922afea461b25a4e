//! Configuration management for mdwiki.
//!
//! Parses `mdwiki.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [render]
//! information_macros = true
//! ignore_macro_escaping = false
//!
//! [markdown]
//! tables = true
//! strikethrough = true
//! heading_attributes = true
//! smart_punctuation = false
//! hard_line_breaks = false
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdwiki.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wiki output options.
    pub render: RenderConfig,
    /// Markdown parser options.
    pub markdown: MarkdownConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Wiki output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render fenced `info`, `tip`, `note` and `warning` blocks as macros.
    pub information_macros: bool,
    /// Leave `{` unescaped so wiki macros written in the source pass through.
    pub ignore_macro_escaping: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            information_macros: true,
            ignore_macro_escaping: false,
        }
    }
}

/// Markdown parser options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MarkdownConfig {
    /// GFM pipe tables.
    pub tables: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// `{#id .class}` heading attributes.
    pub heading_attributes: bool,
    /// Curly quotes, dashes and ellipses.
    pub smart_punctuation: bool,
    /// Treat every line break inside a paragraph as a hard break.
    pub hard_line_breaks: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            heading_attributes: true,
            smart_punctuation: false,
            hard_line_breaks: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `mdwiki.toml` in the current directory and its parents, and falls
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown value types.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.render.information_macros);
        assert!(!config.render.ignore_macro_escaping);
        assert!(config.markdown.tables);
        assert!(config.markdown.strikethrough);
        assert!(config.markdown.heading_attributes);
        assert!(!config.markdown.smart_punctuation);
        assert!(!config.markdown.hard_line_breaks);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.markdown, MarkdownConfig::default());
    }

    #[test]
    fn test_parse_render_config() {
        let toml = r"
[render]
information_macros = false
ignore_macro_escaping = true
";
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(
            config.render,
            RenderConfig {
                information_macros: false,
                ignore_macro_escaping: true,
            }
        );
    }

    #[test]
    fn test_parse_partial_markdown_config() {
        let toml = r"
[markdown]
hard_line_breaks = true
tables = false
";
        let config = Config::from_toml_str(toml).unwrap();
        assert!(config.markdown.hard_line_breaks);
        assert!(!config.markdown.tables);
        // Unspecified keys keep their defaults
        assert!(config.markdown.strikethrough);
        assert!(config.render.information_macros);
    }

    #[test]
    fn test_parse_invalid_type() {
        let toml = r#"
[render]
information_macros = "yes"
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Parse(_)),
            "Expected ConfigError::Parse, got {err:?}"
        );
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\nignore_macro_escaping = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.render.ignore_macro_escaping);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guides");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(nested.join(CONFIG_FILENAME))
        );
    }
}
