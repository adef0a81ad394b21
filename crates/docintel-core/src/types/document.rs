//! Uploaded document metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document held by a session.
///
/// Only metadata is tracked. `content` is a placeholder and is never derived
/// from the uploaded bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document ID
    pub id: String,

    /// Display name (usually the file name)
    pub name: String,

    /// Media type label (e.g. "application/pdf")
    #[serde(rename = "type")]
    pub media_type: String,

    /// Size in bytes
    pub size: u64,

    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,

    /// Placeholder textual content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Document {
    /// Create a new document uploaded now
    pub fn new(id: impl Into<String>, name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            media_type: media_type.into(),
            size,
            uploaded_at: Utc::now(),
            content: None,
        }
    }

    /// Set the placeholder content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the upload timestamp
    pub fn with_uploaded_at(mut self, uploaded_at: DateTime<Utc>) -> Self {
        self.uploaded_at = uploaded_at;
        self
    }

    /// Classify the document by its media type
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_media_type(&self.media_type)
    }

    /// Human readable size, e.g. "240.00 KB"
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Coarse document classification derived from the media type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Word,
    Text,
    Other,
}

impl DocumentKind {
    /// Classify a media type label. Checks run in order, so
    /// "application/pdf" wins over anything else it might contain.
    pub fn from_media_type(media_type: &str) -> Self {
        if media_type.contains("pdf") {
            DocumentKind::Pdf
        } else if media_type.contains("word") || media_type.contains("document") {
            DocumentKind::Word
        } else if media_type.contains("text") {
            DocumentKind::Text
        } else {
            DocumentKind::Other
        }
    }
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count using 1024-based units with two decimals.
///
/// Zero is rendered as "0 Bytes". Sizes beyond the GB range stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && index < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        index += 1;
    }

    format!("{:.2} {}", value, SIZE_UNITS[index])
}
