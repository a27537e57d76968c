//! # WebPlay Editor
//!
//! Editor state and undo/redo history for the WebPlay playground.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorSet + HistoryStack            │
//! │  - Add/remove/update fragments              │
//! │  - Snapshot every change into history       │
//! │  - Coalesce bursts of typing                │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: EditorSet → HTML document    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ workspace: scheduling, persistence, sandbox │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are values**: history stores whole `EditorSet` clones
//! 2. **Linear history**: a new edit after undo discards the redo branch
//! 3. **Closed language set**: html, css and js, one editor each
//!
//! ## Usage
//!
//! ```rust
//! use webplay_editor::{EditSession, EditorSet, Language};
//!
//! let mut session = EditSession::new(EditorSet::defaults());
//!
//! session.update_code("css", "p { color: red }", 0);
//! assert!(session.can_undo());
//!
//! // Only one editor per language
//! assert!(session.add_editor(Language::Css, 1).is_err());
//!
//! session.undo();
//! assert_eq!(*session.current(), EditorSet::defaults());
//! ```

mod coalesce;
mod editor_set;
mod errors;
mod fragment;
mod history;
mod language;
mod session;

pub use coalesce::{CoalescePolicy, EditCoalescer, DEFAULT_QUIET_WINDOW_MS};
pub use editor_set::EditorSet;
pub use errors::EditorError;
pub use fragment::Fragment;
pub use history::HistoryStack;
pub use language::{Language, LanguageSpec};
pub use session::EditSession;
