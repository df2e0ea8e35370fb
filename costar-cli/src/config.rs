//! costar configuration loading from `.costarrc.toml`.
//!
//! Configuration is optional. Without a config file, costar searches for
//! paths to [`DEFAULT_TARGET`] and prints table output.
//!
//! # Example Configuration
//!
//! ```toml
//! [search]
//! target = "Kevin Bacon"
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".costarrc.toml";

/// Target entity used when neither the command line nor the config names one.
pub const DEFAULT_TARGET: &str = "Kevin Bacon";

/// Root configuration structure loaded from `.costarrc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct CostarConfig {
    /// Path search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Path search configuration.
#[derive(Debug, Deserialize, Default)]
pub struct SearchConfig {
    /// Entity every path is searched towards.
    ///
    /// Matched exactly (case-sensitive) against names in the record file.
    #[serde(default)]
    pub target: Option<String>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `csv`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

impl CostarConfig {
    /// Load configuration from `.costarrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Resolve the target entity: explicit choice > config > built-in default.
    pub fn target<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.search.target.as_deref())
            .unwrap_or(DEFAULT_TARGET)
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured color preference, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
