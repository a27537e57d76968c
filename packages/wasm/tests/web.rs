#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use webplay_wasm::{compile_fragments_js, PreviewFrame, Storage, WebPlayground};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen(inline_js = "
let renders = [];
let resets = 0;
export function memoryStorage() {
    const m = new Map();
    return {
        getItem: (k) => (m.has(k) ? m.get(k) : null),
        setItem: (k, v) => { m.set(k, String(v)); },
        removeItem: (k) => { m.delete(k); },
    };
}
export function recordingFrame() {
    renders = [];
    resets = 0;
    return {
        render: (html) => { renders.push(html); },
        reset: () => { resets += 1; },
    };
}
export function renderCount() { return renders.length; }
export function lastRender() { return renders.length ? renders[renders.length - 1] : null; }
export function resetCount() { return resets; }
")]
extern "C" {
    #[wasm_bindgen(js_name = memoryStorage)]
    fn memory_storage() -> Storage;
    #[wasm_bindgen(js_name = recordingFrame)]
    fn recording_frame() -> PreviewFrame;
    #[wasm_bindgen(js_name = renderCount)]
    fn render_count() -> u32;
    #[wasm_bindgen(js_name = lastRender)]
    fn last_render() -> Option<String>;
    #[wasm_bindgen(js_name = resetCount)]
    fn reset_count() -> u32;
}

#[wasm_bindgen_test]
fn auto_run_fires_once_after_burst() {
    let mut playground = WebPlayground::new(memory_storage(), recording_frame(), 1000.0);
    let initial = playground.next_deadline().unwrap();
    assert!(playground.tick(initial));
    assert_eq!(render_count(), 1);

    assert!(playground.update_code("html", "<p>a</p>".to_string(), 2000.0));
    assert!(playground.update_code("html", "<p>ab</p>".to_string(), 2100.0));
    assert_eq!(playground.next_deadline(), Some(2600.0));

    assert!(!playground.tick(2599.0));
    assert!(playground.tick(2600.0));
    assert_eq!(render_count(), 2);
    assert!(last_render().unwrap().contains("<p>ab</p>"));
}

#[wasm_bindgen_test]
fn conflicts_surface_as_errors() {
    let mut playground = WebPlayground::new(memory_storage(), recording_frame(), 0.0);
    assert!(playground.add_editor("css", 1.0).is_err());
    assert!(playground.add_editor("ruby", 2.0).is_err());
}

#[wasm_bindgen_test]
fn reset_sandbox_reaches_frame() {
    let mut playground = WebPlayground::new(memory_storage(), recording_frame(), 0.0);
    playground.reset_sandbox();
    assert_eq!(reset_count(), 1);
}

#[wasm_bindgen_test]
fn compile_fragments_from_json() {
    let json = r#"[{"id":"js","title":"JavaScript","language":"js","code":"1+1"}]"#;
    let html = compile_fragments_js(json).unwrap();
    assert!(html.contains("<script>1+1</script>"));
}
