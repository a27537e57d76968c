//! # Playground
//!
//! Wires the editor session, compile pipeline, persistence and sandbox into the
//! control surface the UI drives.
//!
//! ## Event flow
//!
//! ```text
//! edit ──▶ EditSession ──▶ history push
//!                │
//!                ├──▶ mirror editors to store
//!                └──▶ (auto-run) re-arm debounce timer
//!
//! tick(now) ──▶ timer due? ──▶ compile current snapshot ──▶ sandbox.render
//! run()     ──────────────────▶ compile current snapshot ──▶ sandbox.render
//! ```
//!
//! All methods take the current time in milliseconds instead of reading a
//! clock, so the same code runs under tokio, in the browser, and in tests.

use tracing::{debug, info};
use webplay_compiler_html::{
    compile_with_options, export, CompileOptions, CompiledDocument, ExportFile,
};
use webplay_editor::{CoalescePolicy, EditSession, EditorError, EditorSet, Language};

use crate::config::{AppConfig, Layout, Settings, Theme};
use crate::debounce::{Debouncer, Millis};
use crate::persistence::{PersistenceBridge, LAYOUT_KEY, SETTINGS_KEY, THEME_KEY};
use crate::sandbox::RenderSandbox;
use crate::store::KeyValueStore;

pub struct Playground<S: KeyValueStore, R: RenderSandbox> {
    session: EditSession,
    config: AppConfig,
    bridge: PersistenceBridge<S>,
    sandbox: R,

    /// Most recent compile output; `None` until the first compile
    compiled: Option<CompiledDocument>,
    compile_options: CompileOptions,
    compile_count: u64,

    debouncer: Debouncer,
}

impl<S: KeyValueStore, R: RenderSandbox> Playground<S, R> {
    /// Restore state from `store` and arm the initial auto-run
    pub fn open(store: S, sandbox: R, now: Millis) -> Self {
        Self::open_with_policy(store, sandbox, CoalescePolicy::default(), now)
    }

    pub fn open_with_policy(store: S, sandbox: R, policy: CoalescePolicy, now: Millis) -> Self {
        let bridge = PersistenceBridge::new(store);
        let editors = bridge.load_editors();
        let config = AppConfig::load(&bridge);

        info!(
            editors = editors.len(),
            theme = config.theme.as_str(),
            auto_run = config.settings.auto_run,
            "opened playground"
        );

        let mut playground = Self {
            session: EditSession::with_policy(editors, policy),
            debouncer: Debouncer::new(config.settings.auto_run_delay),
            config,
            bridge,
            sandbox,
            compiled: None,
            compile_options: CompileOptions::default(),
            compile_count: 0,
        };
        playground.rearm(now);
        playground
    }

    pub fn with_compile_options(mut self, options: CompileOptions) -> Self {
        self.compile_options = options;
        self
    }

    pub fn editors(&self) -> &EditorSet {
        self.session.current()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn settings(&self) -> Settings {
        self.config.settings
    }

    pub fn sandbox(&self) -> &R {
        &self.sandbox
    }

    pub fn sandbox_mut(&mut self) -> &mut R {
        &mut self.sandbox
    }

    pub fn store(&self) -> &S {
        self.bridge.store()
    }

    // ── Editors ────────────────────────────────────────────────────────

    pub fn add_editor(&mut self, language: Language, now: Millis) -> Result<String, EditorError> {
        let id = self.session.add_editor(language, now)?;
        self.editors_changed(now);
        Ok(id)
    }

    pub fn remove_editor(&mut self, id: &str, now: Millis) -> Result<bool, EditorError> {
        let removed = self.session.remove_editor(id)?;
        if removed {
            self.editors_changed(now);
        }
        Ok(removed)
    }

    pub fn update_code(&mut self, id: &str, code: impl Into<String>, now: Millis) -> bool {
        let changed = self.session.update_code(id, code, now);
        if changed {
            self.editors_changed(now);
        }
        changed
    }

    pub fn undo(&mut self, now: Millis) -> bool {
        let changed = self.session.undo();
        if changed {
            self.editors_changed(now);
        }
        changed
    }

    pub fn redo(&mut self, now: Millis) -> bool {
        let changed = self.session.redo();
        if changed {
            self.editors_changed(now);
        }
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    /// Restore default editors (undoable), settings and layout (not undoable)
    pub fn reset(&mut self, now: Millis) {
        if self.session.reset_to_defaults() {
            self.bridge.save_editors(self.session.current());
        }

        self.config.settings = Settings::default();
        self.config.layout = Layout::Horizontal;
        self.bridge.save(SETTINGS_KEY, &self.config.settings);
        self.bridge.save(LAYOUT_KEY, &self.config.layout);

        self.debouncer.set_delay(self.config.settings.auto_run_delay);
        self.rearm(now);
        info!("playground reset");
    }

    // ── Compile ────────────────────────────────────────────────────────

    /// Compile the current snapshot right away and render it
    pub fn run(&mut self) -> &CompiledDocument {
        let document = compile_with_options(self.session.current(), &self.compile_options);
        self.sandbox.render(&document);
        self.compile_count += 1;
        debug!(count = self.compile_count, bytes = document.len(), "rendered document");
        self.compiled.insert(document)
    }

    /// Fire the auto-run timer if it is due. Returns true if a compile ran.
    pub fn tick(&mut self, now: Millis) -> bool {
        if self.debouncer.poll(now) {
            self.run();
            true
        } else {
            false
        }
    }

    /// When the host should call [`Playground::tick`] next
    pub fn next_deadline(&self) -> Option<Millis> {
        self.debouncer.next_deadline()
    }

    pub fn compiled(&self) -> Option<&CompiledDocument> {
        self.compiled.as_ref()
    }

    pub fn compile_count(&self) -> u64 {
        self.compile_count
    }

    /// The last compiled document as a downloadable file
    pub fn export(&self) -> ExportFile {
        export(self.compiled.as_ref())
    }

    /// Throw away the sandbox context (e.g. to stop a runaway script)
    pub fn reset_sandbox(&mut self) {
        self.sandbox.reset();
    }

    // ── Configuration ──────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) -> Theme {
        self.config.theme = self.config.theme.toggle();
        self.bridge.save(THEME_KEY, &self.config.theme);
        self.config.theme
    }

    pub fn toggle_layout(&mut self) -> Layout {
        self.config.layout = self.config.layout.toggle();
        self.bridge.save(LAYOUT_KEY, &self.config.layout);
        self.config.layout
    }

    pub fn open_settings(&mut self) {
        self.config.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.config.settings_open = false;
    }

    /// Apply new settings (clamped). Re-arms or cancels the auto-run timer.
    pub fn update_settings(&mut self, settings: Settings, now: Millis) -> Settings {
        let settings = settings.clamped();
        if settings == self.config.settings {
            return settings;
        }

        self.config.settings = settings;
        self.bridge.save(SETTINGS_KEY, &settings);
        self.debouncer.set_delay(settings.auto_run_delay);
        self.rearm(now);
        settings
    }

    /// Write everything back to the store and hand the store back
    pub fn close(mut self) -> S {
        self.bridge.save_editors(self.session.current());
        self.config.store(&mut self.bridge);
        info!("closed playground");
        self.bridge.into_store()
    }

    fn editors_changed(&mut self, now: Millis) {
        self.bridge.save_editors(self.session.current());
        if self.config.settings.auto_run {
            self.debouncer.schedule(now);
        }
    }

    fn rearm(&mut self, now: Millis) {
        if self.config.settings.auto_run {
            self.debouncer.schedule(now);
        } else {
            self.debouncer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::EDITORS_KEY;
    use crate::sandbox::RecordingSandbox;
    use crate::store::MemoryStore;

    fn open() -> Playground<MemoryStore, RecordingSandbox> {
        Playground::open(MemoryStore::new(), RecordingSandbox::new(), 0)
    }

    #[test]
    fn test_open_arms_initial_compile() {
        let mut playground = open();
        assert_eq!(playground.next_deadline(), Some(500));
        assert!(playground.compiled().is_none());

        assert!(playground.tick(500));
        assert_eq!(playground.sandbox().render_count(), 1);
    }

    #[test]
    fn test_edit_is_mirrored_to_store() {
        let mut playground = open();
        playground.update_code("html", "<p>saved</p>", 10);

        let stored = playground.store().get(EDITORS_KEY).unwrap().unwrap();
        assert!(stored.contains("<p>saved</p>"));
    }

    #[test]
    fn test_undo_is_mirrored_to_store() {
        let mut playground = open();
        playground.update_code("html", "<p>saved</p>", 10);
        playground.undo(20);

        let stored = playground.store().get(EDITORS_KEY).unwrap().unwrap();
        assert!(!stored.contains("<p>saved</p>"));
    }

    #[test]
    fn test_run_without_auto_run() {
        let store = MemoryStore::new().with_value(SETTINGS_KEY, r#"{"autoRun":false}"#);
        let mut playground = Playground::open(store, RecordingSandbox::new(), 0);

        assert_eq!(playground.next_deadline(), None);
        playground.update_code("css", "p{}", 10);
        assert_eq!(playground.next_deadline(), None);
        assert!(!playground.tick(10_000));

        let html = playground.run().as_str().to_string();
        assert!(html.contains("<style>p{}</style>"));
        assert_eq!(playground.compile_count(), 1);
    }

    #[test]
    fn test_disabling_auto_run_cancels_pending() {
        let mut playground = open();
        let settings = Settings {
            auto_run: false,
            ..playground.settings()
        };
        playground.update_settings(settings, 10);

        assert_eq!(playground.next_deadline(), None);
        assert!(!playground.tick(1_000));
    }

    #[test]
    fn test_toggle_theme_and_layout_persist() {
        let mut playground = open();
        assert_eq!(playground.toggle_theme(), Theme::Light);
        assert_eq!(playground.toggle_layout(), Layout::Vertical);

        assert_eq!(
            playground.store().get(THEME_KEY).unwrap().as_deref(),
            Some("\"light\"")
        );
        assert_eq!(
            playground.store().get(LAYOUT_KEY).unwrap().as_deref(),
            Some("\"vertical\"")
        );
    }

    #[test]
    fn test_settings_dialog_state() {
        let mut playground = open();
        playground.open_settings();
        assert!(playground.config().settings_open);
        playground.close_settings();
        assert!(!playground.config().settings_open);
    }
}
