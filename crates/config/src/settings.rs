//! Configuration structures for quill settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Engine configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Tab size in visual columns
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Open documents read-only by default
    #[serde(default = "default_read_only")]
    pub read_only: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: defaults::TAB_SIZE,
            read_only: defaults::READ_ONLY,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            min_level: defaults::MIN_LOG_LEVEL.to_string(),
        }
    }
}

// Default value functions for serde
fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}

fn default_read_only() -> bool {
    defaults::READ_ONLY
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}
