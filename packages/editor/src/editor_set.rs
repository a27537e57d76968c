//! # Editor Set
//!
//! The ordered collection of open editors.
//!
//! ## Invariants
//!
//! - Insertion order is significant (it is the panel order)
//! - Ids are unique
//! - At most one fragment per [`Language`]
//! - Non-empty: removing the last editor is refused
//!
//! An `EditorSet` is a plain value. History snapshots are clones of it and two
//! sets are equal when their fragments are equal field by field, which is the
//! same as comparing their serialized form.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{EditorError, Fragment, Language};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorSet {
    fragments: Vec<Fragment>,
}

impl EditorSet {
    /// The built-in html/css/js triple
    pub fn defaults() -> Self {
        Self {
            fragments: Language::ALL.into_iter().map(Fragment::scaffold).collect(),
        }
    }

    /// Build a set from arbitrary fragments, enforcing the set invariants
    pub fn from_fragments(fragments: Vec<Fragment>) -> Result<Self, EditorError> {
        if fragments.is_empty() {
            return Err(EditorError::Empty);
        }

        let mut ids = HashSet::new();
        let mut languages = HashSet::new();
        for fragment in &fragments {
            if !ids.insert(fragment.id.as_str()) {
                return Err(EditorError::DuplicateId(fragment.id.clone()));
            }
            if !languages.insert(fragment.language) {
                return Err(EditorError::LanguageExists(fragment.language));
            }
        }

        Ok(Self { fragments })
    }

    /// Parse the persisted JSON form (an array of fragments)
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let fragments: Vec<Fragment> = serde_json::from_str(json)?;
        Self::from_fragments(fragments)
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(&self.fragments)?)
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|f| f.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.id == id)
    }

    pub fn by_language(&self, language: Language) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.language == language)
    }

    /// Code of the fragment in `language`, empty if there is none
    pub fn code_for(&self, language: Language) -> &str {
        self.by_language(language)
            .map(|f| f.code.as_str())
            .unwrap_or("")
    }

    /// Append a new editor for `language` with placeholder code.
    ///
    /// The id is `<tag>-<discriminator>`; the discriminator is bumped until the
    /// id is unused. Returns the id of the new fragment.
    pub fn add(&mut self, language: Language, discriminator: u64) -> Result<String, EditorError> {
        if self.by_language(language).is_some() {
            return Err(EditorError::LanguageExists(language));
        }

        let mut n = discriminator;
        let id = loop {
            let candidate = format!("{}-{}", language.tag(), n);
            if self.get(&candidate).is_none() {
                break candidate;
            }
            n += 1;
        };

        self.fragments.push(Fragment {
            id: id.clone(),
            title: language.title().to_string(),
            language,
            code: language.placeholder_code(),
        });

        Ok(id)
    }

    /// Remove the editor with `id`.
    ///
    /// Returns `Ok(false)` if no such editor exists.
    pub fn remove(&mut self, id: &str) -> Result<bool, EditorError> {
        let Some(index) = self.fragments.iter().position(|f| f.id == id) else {
            return Ok(false);
        };

        if self.fragments.len() <= 1 {
            return Err(EditorError::LastEditor);
        }

        self.fragments.remove(index);
        Ok(true)
    }

    /// Replace the code of the editor with `id`. Returns false if absent.
    pub fn update_code(&mut self, id: &str, code: impl Into<String>) -> bool {
        match self.fragments.iter_mut().find(|f| f.id == id) {
            Some(fragment) => {
                fragment.code = code.into();
                true
            }
            None => false,
        }
    }
}

impl Default for EditorSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<'a> IntoIterator for &'a EditorSet {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
