//! TOML-backed settings for quill.
//!
//! The engine never touches the filesystem; the host reads and writes the
//! settings file and hands the text through [`Config::from_toml`] /
//! [`Config::to_toml`]. Missing fields fall back to defaults, so an empty
//! string is a valid configuration.

mod settings;

use anyhow::{Context, Result};

pub use settings::{Config, EditorSettings, LoggingSettings};

/// Default values, shared between serde defaults and `Default` impls.
pub mod defaults {
    pub const TAB_SIZE: usize = 4;
    pub const READ_ONLY: bool = false;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse configuration")
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
