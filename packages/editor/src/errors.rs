//! Error types for the editor

use crate::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("{} editor already exists.", .0.tag().to_uppercase())]
    LanguageExists(Language),

    #[error("You can't close the last editor!")]
    LastEditor,

    #[error("Duplicate editor id: {0}")]
    DuplicateId(String),

    #[error("Editor set is empty")]
    Empty,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditorError {
    /// User-action conflicts leave state unchanged and are shown to the user
    pub fn is_conflict(&self) -> bool {
        matches!(self, EditorError::LanguageExists(_) | EditorError::LastEditor)
    }
}
