use wasm_bindgen::prelude::*;
use webplay_compiler_html::{compile_sources, CompileOptions, CompiledDocument, Sources};
use webplay_editor::{Fragment, Language};
use webplay_workspace::{
    KeyValueStore, Millis, Playground, RenderSandbox, Settings, StoreError, StoreResult,
};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
extern "C" {
    /// Anything shaped like `window.localStorage`
    pub type Storage;

    #[wasm_bindgen(method, catch, js_name = getItem)]
    fn get_item(this: &Storage, key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setItem)]
    fn set_item(this: &Storage, key: &str, value: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeItem)]
    fn remove_item(this: &Storage, key: &str) -> Result<(), JsValue>;

    /// Host-provided isolated frame that displays compiled documents
    pub type PreviewFrame;

    #[wasm_bindgen(method)]
    fn render(this: &PreviewFrame, html: &str);

    #[wasm_bindgen(method)]
    fn reset(this: &PreviewFrame);
}

struct JsStorage(Storage);

fn unavailable(err: JsValue) -> StoreError {
    StoreError::Unavailable(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStore for JsStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.0.get_item(key).map_err(unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.0.set_item(key, value).map_err(unavailable)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.0.remove_item(key).map_err(unavailable)
    }
}

struct FrameSandbox(PreviewFrame);

impl RenderSandbox for FrameSandbox {
    fn render(&mut self, document: &CompiledDocument) {
        self.0.render(document.as_str());
    }

    fn reset(&mut self) {
        self.0.reset();
    }
}

/// JS timestamps (`Date.now()`, `performance.now()`) arrive as f64
fn millis(now: f64) -> Millis {
    if now.is_finite() && now > 0.0 {
        now as Millis
    } else {
        0
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The playground control surface for the browser UI.
///
/// The host owns the clock: pass `Date.now()` to every call that can touch
/// the auto-run timer and call `tick` when `nextDeadline` elapses.
#[wasm_bindgen]
pub struct WebPlayground {
    inner: Playground<JsStorage, FrameSandbox>,
}

#[wasm_bindgen]
impl WebPlayground {
    #[wasm_bindgen(constructor)]
    pub fn new(storage: Storage, frame: PreviewFrame, now: f64) -> WebPlayground {
        WebPlayground {
            inner: Playground::open(JsStorage(storage), FrameSandbox(frame), millis(now)),
        }
    }

    /// Fragments as a JSON array of `{id, title, language, code}`
    #[wasm_bindgen(js_name = editorsJson)]
    pub fn editors_json(&self) -> Result<String, JsValue> {
        self.inner.editors().to_json().map_err(js_error)
    }

    #[wasm_bindgen(js_name = addEditor)]
    pub fn add_editor(&mut self, language: &str, now: f64) -> Result<String, JsValue> {
        let language: Language = language.parse().map_err(js_error)?;
        self.inner.add_editor(language, millis(now)).map_err(js_error)
    }

    #[wasm_bindgen(js_name = removeEditor)]
    pub fn remove_editor(&mut self, id: &str, now: f64) -> Result<bool, JsValue> {
        self.inner.remove_editor(id, millis(now)).map_err(js_error)
    }

    #[wasm_bindgen(js_name = updateCode)]
    pub fn update_code(&mut self, id: &str, code: String, now: f64) -> bool {
        self.inner.update_code(id, code, millis(now))
    }

    pub fn undo(&mut self, now: f64) -> bool {
        self.inner.undo(millis(now))
    }

    pub fn redo(&mut self, now: f64) -> bool {
        self.inner.redo(millis(now))
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    pub fn reset(&mut self, now: f64) {
        self.inner.reset(millis(now));
    }

    /// Compile now and return the document
    pub fn run(&mut self) -> String {
        self.inner.run().as_str().to_string()
    }

    /// Fire the auto-run timer if due
    pub fn tick(&mut self, now: f64) -> bool {
        self.inner.tick(millis(now))
    }

    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline().map(|deadline| deadline as f64)
    }

    #[wasm_bindgen(js_name = resetSandbox)]
    pub fn reset_sandbox(&mut self) {
        self.inner.reset_sandbox();
    }

    /// `{fileName, contentType, body}` for the download link
    #[wasm_bindgen(js_name = exportFile)]
    pub fn export_file(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.export()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        self.inner.toggle_theme().as_str().to_string()
    }

    #[wasm_bindgen(js_name = toggleLayout)]
    pub fn toggle_layout(&mut self) -> String {
        self.inner.toggle_layout().as_str().to_string()
    }

    pub fn theme(&self) -> String {
        self.inner.config().theme.as_str().to_string()
    }

    pub fn layout(&self) -> String {
        self.inner.config().layout.as_str().to_string()
    }

    #[wasm_bindgen(js_name = openSettings)]
    pub fn open_settings(&mut self) {
        self.inner.open_settings();
    }

    #[wasm_bindgen(js_name = closeSettings)]
    pub fn close_settings(&mut self) {
        self.inner.close_settings();
    }

    #[wasm_bindgen(js_name = settingsOpen)]
    pub fn settings_open(&self) -> bool {
        self.inner.config().settings_open
    }

    /// `{fontSize, autoRun, autoRunDelay}`
    #[wasm_bindgen(js_name = settingsJson)]
    pub fn settings_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.settings()).map_err(js_error)
    }

    /// Apply settings JSON (missing fields take defaults). Returns the
    /// clamped settings that were applied.
    #[wasm_bindgen(js_name = updateSettings)]
    pub fn update_settings(&mut self, json: &str, now: f64) -> Result<String, JsValue> {
        let settings: Settings = serde_json::from_str(json).map_err(js_error)?;
        let applied = self.inner.update_settings(settings, millis(now));
        serde_json::to_string(&applied).map_err(js_error)
    }

    /// Persist everything (e.g. on `beforeunload`)
    pub fn close(self) {
        self.inner.close();
    }
}

/// Compile a JSON fragment array into a standalone document
#[wasm_bindgen(js_name = compileFragments)]
pub fn compile_fragments_js(json: &str) -> Result<String, JsValue> {
    compile_fragments(json).map_err(js_error)
}

/// Only the JSON has to be valid. The first fragment of each language is
/// used and the rest are ignored, so an empty array gives the bare skeleton.
fn compile_fragments(json: &str) -> Result<String, serde_json::Error> {
    let fragments: Vec<Fragment> = serde_json::from_str(json)?;
    let code_for = |language: Language| {
        fragments
            .iter()
            .find(|fragment| fragment.language == language)
            .map(|fragment| fragment.code.as_str())
            .unwrap_or_default()
    };

    let sources = Sources {
        html: code_for(Language::Html),
        css: code_for(Language::Css),
        js: code_for(Language::Js),
    };
    Ok(compile_sources(sources, &CompileOptions::default()).into_string())
}
