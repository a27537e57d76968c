pub mod config;
pub mod debounce;
pub mod persistence;
pub mod playground;
pub mod sandbox;
pub mod store;

pub use config::{AppConfig, Layout, Settings, Theme};
pub use debounce::{wall_clock_millis, Debouncer, Millis};
pub use persistence::{PersistenceBridge, EDITORS_KEY, LAYOUT_KEY, SETTINGS_KEY, THEME_KEY};
pub use playground::Playground;
pub use sandbox::{NullSandbox, RecordingSandbox, RenderSandbox};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};

// Re-export editor and compiler types for convenience
pub use webplay_compiler_html::{CompiledDocument, ExportFile};
pub use webplay_editor::{EditorError, EditorSet, Fragment, Language};
