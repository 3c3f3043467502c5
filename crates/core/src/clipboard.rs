//! Clipboard collaborator contract.
//!
//! The editor exchanges plain UTF-8 strings with whatever clipboard the host
//! wires in at composition time - the system clipboard in the application,
//! [`LocalClipboard`] in tests and headless hosts. The editor itself never
//! reaches for a global.

use anyhow::Result;

/// Plain-text clipboard access.
pub trait Clipboard {
    /// Store `text`, replacing any previous contents.
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Current contents, or `None` when empty or inaccessible.
    fn text(&mut self) -> Option<String>;
}

/// In-memory clipboard for tests and hosts without a system clipboard.
#[derive(Debug, Default)]
pub struct LocalClipboard {
    contents: Option<String>,
}

impl LocalClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for LocalClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn text(&mut self) -> Option<String> {
        self.contents.clone().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_clipboard_round_trip() {
        let mut clipboard = LocalClipboard::new();
        assert_eq!(clipboard.text(), None);
        clipboard.set_text("hello").unwrap();
        assert_eq!(clipboard.text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_empty_text_reads_as_none() {
        let mut clipboard = LocalClipboard::new();
        clipboard.set_text("").unwrap();
        assert_eq!(clipboard.text(), None);
    }
}
