//! Preview file used as the render sandbox on the command line.
//!
//! The browser that opens the file provides the actual isolation; this side
//! only writes the document and never waits on what it does.

use std::path::{Path, PathBuf};
use webplay_compiler_html::CompiledDocument;
use webplay_workspace::RenderSandbox;

pub const PREVIEW_FILE_NAME: &str = "webplay-preview.html";

pub struct PreviewFile {
    path: PathBuf,
}

impl PreviewFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderSandbox for PreviewFile {
    fn render(&mut self, document: &CompiledDocument) {
        if let Err(e) = std::fs::write(&self.path, document.as_str()) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write preview");
        }
    }

    fn reset(&mut self) {
        if let Err(e) = std::fs::write(&self.path, "") {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to clear preview");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webplay_compiler_html::compile;
    use webplay_editor::EditorSet;

    #[test]
    fn test_render_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut preview = PreviewFile::new(dir.path().join(PREVIEW_FILE_NAME));

        let document = compile(&EditorSet::defaults());
        preview.render(&document);
        assert_eq!(std::fs::read_to_string(preview.path()).unwrap(), document.as_str());

        preview.reset();
        assert!(std::fs::read_to_string(preview.path()).unwrap().is_empty());
    }

    #[test]
    fn test_render_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let mut preview = PreviewFile::new(dir.path().join("missing").join(PREVIEW_FILE_NAME));

        preview.render(&compile(&EditorSet::defaults()));
        assert!(!preview.path().exists());
    }
}
