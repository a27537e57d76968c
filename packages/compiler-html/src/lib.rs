//! # WebPlay HTML Compiler
//!
//! Turns an [`EditorSet`](webplay_editor::EditorSet) snapshot into one HTML
//! document. Compilation is a pure string assembly and cannot fail.

mod compiler;
mod export;

pub use compiler::{
    compile, compile_sources, compile_with_options, CompileOptions, CompiledDocument, Sources,
};
pub use export::{export, ExportFile, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
