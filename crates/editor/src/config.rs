//! Per-editor configuration.

use quill_config::Config;

/// Editor mode configuration.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Tab size in visual columns; never zero.
    pub tab_size: usize,
    /// Reject every mutating operation.
    pub read_only: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: quill_config::defaults::TAB_SIZE,
            read_only: false,
        }
    }
}

impl EditorConfig {
    /// Derive an editor configuration from application settings.
    pub fn from_settings(config: &Config) -> Self {
        Self {
            tab_size: config.editor.tab_size.max(1),
            read_only: config.editor.read_only,
        }
    }
}
