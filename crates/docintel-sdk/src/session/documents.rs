//! Session document collection

use docintel_core::Document;
use serde::{Deserialize, Serialize};

/// Metadata of a file handed to the session for upload.
///
/// File bytes are never read; only the name, media type and size are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }

    /// Turn the upload into a document with a placeholder content field
    pub fn into_document(self, id: String) -> Document {
        let content = format!("Sample content for {}", self.name);
        Document::new(id, self.name, self.media_type, self.size).with_content(content)
    }
}

/// Documents owned by a session, in upload order
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn as_slice(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Append documents after the existing ones
    pub fn extend(&mut self, documents: impl IntoIterator<Item = Document>) {
        self.documents.extend(documents);
    }

    /// Remove a document by ID. Unknown IDs are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Document> {
        let index = self.documents.iter().position(|d| d.id == id)?;
        Some(self.documents.remove(index))
    }

    /// Remove every document
    pub fn clear(&mut self) -> usize {
        let removed = self.documents.len();
        self.documents.clear();
        removed
    }

    /// Total size of all documents in bytes
    pub fn total_size(&self) -> u64 {
        self.documents.iter().map(|d| d.size).sum()
    }
}
