//! Render sandbox seam
//!
//! The sandbox executes a compiled document in isolation. Rendering is fire
//! and forget: the host cannot observe or interrupt what runs inside. The only
//! way to stop a misbehaving document is [`RenderSandbox::reset`], which
//! discards the context and creates a fresh one.

use webplay_compiler_html::CompiledDocument;

pub trait RenderSandbox {
    /// Hand a document to the sandbox for display
    fn render(&mut self, document: &CompiledDocument);

    /// Discard the execution context and start a blank one
    fn reset(&mut self);
}

/// Sandbox that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSandbox;

impl RenderSandbox for NullSandbox {
    fn render(&mut self, _document: &CompiledDocument) {}

    fn reset(&mut self) {}
}

/// Sandbox that keeps what it was given (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct RecordingSandbox {
    pub renders: Vec<CompiledDocument>,
    pub resets: usize,
}

impl RecordingSandbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&CompiledDocument> {
        self.renders.last()
    }

    pub fn render_count(&self) -> usize {
        self.renders.len()
    }
}

impl RenderSandbox for RecordingSandbox {
    fn render(&mut self, document: &CompiledDocument) {
        self.renders.push(document.clone());
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}
