use serde::{Deserialize, Serialize};

use crate::Language;

/// A single editor: one source fragment in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Unique, stable identifier
    pub id: String,

    pub title: String,

    pub language: Language,

    pub code: String,
}

impl Fragment {
    pub fn new(id: impl Into<String>, language: Language, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: language.title().to_string(),
            language,
            code: code.into(),
        }
    }

    /// Fragment with the built-in scaffold for its language, id = language tag
    pub fn scaffold(language: Language) -> Self {
        Self::new(language.tag(), language, language.spec().default_code)
    }
}
