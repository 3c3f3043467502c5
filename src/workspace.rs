//! The open-document registry.
//!
//! A [`Workspace`] owns every open [`Editor`] and is the single hand-off
//! point between background document loading and the frame loop. Loading
//! happens on worker threads the host spawns through
//! [`Workspace::load_in_background`]; finished documents land in a shared,
//! lock-guarded inbox that [`Workspace::poll_loaded`] drains with a
//! `try_lock` once per frame, so the frame thread never blocks on a loader.
//! Everything else on a workspace is single-threaded by contract.
//!
//! The engine performs no I/O itself: a loader runs whatever closure the host
//! supplies and hands back the produced text.

use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::Result;

use quill_editor::{Editor, EditorConfig};

/// Identity of one open document, unique within a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u64);

/// One open document: its display title and editing core.
pub struct Document {
    pub title: String,
    pub editor: Editor,
}

struct LoadedDocument {
    title: String,
    result: Result<String>,
}

/// Registry of open documents plus the background-load inbox.
pub struct Workspace {
    config: EditorConfig,
    documents: Vec<(DocumentId, Document)>,
    next_id: u64,
    inbox: Arc<Mutex<Vec<LoadedDocument>>>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Workspace {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            documents: Vec::new(),
            next_id: 0,
            inbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Open a document from already-loaded text.
    pub fn open(&mut self, title: impl Into<String>, text: &str) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        self.documents.push((
            id,
            Document {
                title: title.into(),
                editor: Editor::from_text(text, self.config.clone()),
            },
        ));
        id
    }

    /// Produce a document's text on a worker thread and queue it for
    /// [`Workspace::poll_loaded`].
    ///
    /// `source` typically reads a file; any error it returns is reported when
    /// the result is polled, not here.
    pub fn load_in_background<F>(&self, title: impl Into<String>, source: F)
    where
        F: FnOnce() -> Result<String> + Send + 'static,
    {
        let title = title.into();
        let inbox = Arc::clone(&self.inbox);
        thread::spawn(move || {
            let result = source();
            if let Ok(mut pending) = inbox.lock() {
                pending.push(LoadedDocument { title, result });
            }
        });
    }

    /// Drain finished background loads into the registry. Non-blocking: when
    /// a loader currently holds the inbox lock, this returns empty and the
    /// next frame picks the documents up. Failed loads are logged and
    /// dropped.
    pub fn poll_loaded(&mut self) -> Vec<DocumentId> {
        let Ok(mut pending) = self.inbox.try_lock() else {
            return Vec::new();
        };
        let loaded: Vec<LoadedDocument> = pending.drain(..).collect();
        drop(pending);

        let mut opened = Vec::new();
        for document in loaded {
            match document.result {
                Ok(text) => opened.push(self.open(document.title, &text)),
                Err(err) => log::warn!("failed to load '{}': {err:#}", document.title),
            }
        }
        opened
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents
            .iter()
            .find(|(doc_id, _)| *doc_id == id)
            .map(|(_, doc)| doc)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents
            .iter_mut()
            .find(|(doc_id, _)| *doc_id == id)
            .map(|(_, doc)| doc)
    }

    /// Close a document, dropping its editor state.
    pub fn close(&mut self, id: DocumentId) {
        self.documents.retain(|(doc_id, _)| *doc_id != id);
    }

    /// Open documents in opening order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentId, &Document)> {
        self.documents.iter().map(|(id, doc)| (*id, doc))
    }
}
