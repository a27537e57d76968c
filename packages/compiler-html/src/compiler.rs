use serde::{Deserialize, Serialize};
use std::fmt;
use webplay_editor::{EditorSet, Language};

/// Options for the document skeleton.
///
/// Fragment bodies are never reformatted; only the surrounding markup is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Pretty print the skeleton
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
    /// Optional `<title>`
    pub title: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            lang: "en".to_string(),
            title: None,
        }
    }
}

/// The three fragment bodies a document is built from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sources<'a> {
    pub html: &'a str,
    pub css: &'a str,
    pub js: &'a str,
}

impl<'a> Sources<'a> {
    /// Look up at most one fragment per language; missing ones are empty
    pub fn from_set(set: &'a EditorSet) -> Self {
        Self {
            html: set.code_for(Language::Html),
            css: set.code_for(Language::Css),
            js: set.code_for(Language::Js),
        }
    }
}

/// A compiled, renderable document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledDocument(String);

impl CompiledDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True only for the never-compiled placeholder
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for CompiledDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CompiledDocument> for String {
    fn from(doc: CompiledDocument) -> Self {
        doc.0
    }
}

struct Context<'o> {
    options: &'o CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'o> Context<'o> {
    fn new(options: &'o CompileOptions, capacity: usize) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::with_capacity(capacity),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    /// Open `tag`, embed `body` verbatim, close `tag`
    fn add_raw_block(&mut self, open: &str, body: &str, close: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(open);
        self.add(body);
        self.add(close);
        self.newline();
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile an editor set with default options
pub fn compile(set: &EditorSet) -> CompiledDocument {
    compile_with_options(set, &CompileOptions::default())
}

pub fn compile_with_options(set: &EditorSet, options: &CompileOptions) -> CompiledDocument {
    let document = compile_sources(Sources::from_set(set), options);
    tracing::debug!(bytes = document.len(), fragments = set.len(), "compiled document");
    document
}

/// Assemble a document: style block, then body markup, then script block.
///
/// Fragment contents are embedded as-is. Isolation is the job of the render
/// sandbox, not of this function.
pub fn compile_sources(sources: Sources<'_>, options: &CompileOptions) -> CompiledDocument {
    let capacity = sources.html.len() + sources.css.len() + sources.js.len() + 256;
    let mut ctx = Context::new(options, capacity);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line(&format!("<html lang=\"{}\">", escape_attribute(&options.lang)));
    ctx.indent();

    compile_head(sources.css, &mut ctx);
    compile_body(sources.html, sources.js, &mut ctx);

    ctx.dedent();
    ctx.add_line("</html>");

    CompiledDocument(ctx.get_output())
}

fn compile_head(css: &str, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let options = ctx.options;
    if let Some(title) = &options.title {
        let line = format!("<title>{}</title>", escape_attribute(title));
        ctx.add_line(&line);
    }
    ctx.add_raw_block("<style>", css, "</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_body(html: &str, js: &str, ctx: &mut Context) {
    ctx.add_line("<body>");
    ctx.indent();

    ctx.add_raw_block("", html, "");
    ctx.add_raw_block("<script>", js, "</script>");

    ctx.dedent();
    ctx.add_line("</body>");
}

/// Escapes values the compiler itself writes into markup
fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
