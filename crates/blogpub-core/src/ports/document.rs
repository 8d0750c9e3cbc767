//! Document source port (driven/secondary port)
//!
//! The host application owns the editor and the vault. The core only needs
//! to know which note is active and to read its text; it never writes
//! back, so a publish attempt can not mutate the note.

use serde::{Deserialize, Serialize};

/// The note currently open in the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDocument {
    /// Vault-relative path, e.g. `Resources/Tech/Ownership.md`
    pub path: String,
    /// File name without extension, e.g. `Ownership`
    pub basename: String,
}

impl ActiveDocument {
    pub fn new(path: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            basename: basename.into(),
        }
    }
}

/// Port trait for the host editor's file access
#[async_trait::async_trait]
pub trait IDocumentSource: Send + Sync {
    /// Returns the active note, or `None` if no file is open
    fn active_document(&self) -> Option<ActiveDocument>;

    /// Reads the full text of `document`
    async fn read(&self, document: &ActiveDocument) -> anyhow::Result<String>;
}
