//! System clipboard backend for quill.
//!
//! Implements the `quill-core` clipboard contract on top of arboard. The
//! underlying clipboard handle lives for the application lifetime behind a
//! process-wide lock - some platforms drop clipboard contents when the
//! writing handle is destroyed. On Linux, writes go to both the CLIPBOARD and
//! PRIMARY selections.

use std::sync::{Mutex, OnceLock};

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard as Arboard;

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

use quill_core::Clipboard;

static CLIPBOARD: OnceLock<Mutex<Arboard>> = OnceLock::new();

fn handle() -> Result<&'static Mutex<Arboard>> {
    if let Some(handle) = CLIPBOARD.get() {
        return Ok(handle);
    }
    let clipboard = Arboard::new().context("Failed to initialize system clipboard")?;
    Ok(CLIPBOARD.get_or_init(|| Mutex::new(clipboard)))
}

/// The host system clipboard.
///
/// Cheap to construct; all instances share the process-wide handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = handle()?
            .lock()
            .map_err(|_| anyhow!("Clipboard lock poisoned"))?;

        #[cfg(target_os = "linux")]
        {
            clipboard
                .set()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text(text.to_string())
                .context("Failed to set clipboard text")?;
            // PRIMARY (middle-click paste) is best-effort.
            let _ = clipboard
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text.to_string());
        }

        #[cfg(not(target_os = "linux"))]
        clipboard
            .set_text(text.to_string())
            .context("Failed to set clipboard text")?;

        Ok(())
    }

    fn text(&mut self) -> Option<String> {
        let mut clipboard = handle().ok()?.lock().ok()?;

        #[cfg(target_os = "linux")]
        {
            if let Ok(text) = clipboard
                .get()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text()
            {
                if !text.is_empty() {
                    return Some(text);
                }
            }
            clipboard
                .get()
                .clipboard(LinuxClipboardKind::Primary)
                .text()
                .ok()
                .filter(|t| !t.is_empty())
        }

        #[cfg(not(target_os = "linux"))]
        clipboard.get_text().ok().filter(|t| !t.is_empty())
    }
}
