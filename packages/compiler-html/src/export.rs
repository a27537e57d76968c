//! Export of the compiled document as a downloadable file

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::CompiledDocument;

pub const EXPORT_FILE_NAME: &str = "webplay-project.html";
pub const EXPORT_CONTENT_TYPE: &str = "text/html";

/// A file offered to the user for download
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: String,
    pub body: String,
}

impl ExportFile {
    /// Write the file into `dir`, returning its path
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.body)?;
        Ok(path)
    }
}

/// Package the most recently compiled document.
///
/// If nothing has been compiled yet the export is an empty document.
pub fn export(document: Option<&CompiledDocument>) -> ExportFile {
    ExportFile {
        file_name: EXPORT_FILE_NAME.to_string(),
        content_type: EXPORT_CONTENT_TYPE.to_string(),
        body: document.map(|d| d.as_str().to_string()).unwrap_or_default(),
    }
}
