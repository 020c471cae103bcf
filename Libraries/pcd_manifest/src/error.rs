//! Error types for rendering and emitting manifests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// A value holds a character XML 1.0 cannot represent.
    #[error("{field} contains a character not allowed in XML: {character:?}")]
    InvalidCharacter { field: String, character: char },

    /// The XML writer rejected an event.
    #[error("XML error: {0}")]
    Xml(String),

    /// Writing the document to its destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
