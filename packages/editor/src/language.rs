//! # Fragment Languages
//!
//! The playground supports a fixed, closed set of languages. Each variant maps
//! to a static [`LanguageSpec`] describing how fragments of that language are
//! titled, commented and scaffolded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::EditorError;

/// Language of a single editor fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Js,
}

/// Static per-language behavior
#[derive(Debug)]
pub struct LanguageSpec {
    /// Short tag used in ids and on the wire (`html`, `css`, `js`)
    pub tag: &'static str,

    /// Panel title
    pub title: &'static str,

    /// Conventional file name when fragments live on disk
    pub file_name: &'static str,

    pub comment_open: &'static str,
    pub comment_close: &'static str,

    /// Code used by the default editor set
    pub default_code: &'static str,
}

const HTML_DEFAULT: &str = r#"<div class="container">
  <h1>Welcome to WebPlay Studio</h1>
  <p>Your professional real-time code playground.</p>
  <button onclick="greet()">Click Me</button>
</div>"#;

const CSS_DEFAULT: &str = r#"body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
  background-color: #f0f4f8;
  display: grid;
  place-items: center;
  height: 100vh;
  margin: 0;
}

.container {
  text-align: center;
  background: white;
  padding: 2rem 3rem;
  border-radius: 12px;
  box-shadow: 0 10px 25px rgba(0,0,0,0.1);
}

h1 {
  color: #4f46e5; /* Indigo */
}

button {
  background-color: #4f46e5;
  color: white;
  border: none;
  padding: 10px 20px;
  border-radius: 6px;
  cursor: pointer;
  font-size: 16px;
  transition: background-color 0.2s;
}

button:hover {
  background-color: #4338ca;
}"#;

const JS_DEFAULT: &str = r#"function greet() {
  const heading = document.querySelector('h1');
  heading.textContent = 'Hello from WebPlay!';
  console.log('Button clicked! Welcome to the console.');
}"#;

static SPECS: [LanguageSpec; 3] = [
    LanguageSpec {
        tag: "html",
        title: "HTML",
        file_name: "index.html",
        comment_open: "<!--",
        comment_close: "-->",
        default_code: HTML_DEFAULT,
    },
    LanguageSpec {
        tag: "css",
        title: "CSS",
        file_name: "style.css",
        comment_open: "/*",
        comment_close: "*/",
        default_code: CSS_DEFAULT,
    },
    LanguageSpec {
        tag: "js",
        title: "JavaScript",
        file_name: "script.js",
        comment_open: "/*",
        comment_close: "*/",
        default_code: JS_DEFAULT,
    },
];

impl Language {
    /// All languages, in default panel order
    pub const ALL: [Language; 3] = [Language::Html, Language::Css, Language::Js];

    pub fn spec(self) -> &'static LanguageSpec {
        match self {
            Language::Html => &SPECS[0],
            Language::Css => &SPECS[1],
            Language::Js => &SPECS[2],
        }
    }

    pub fn tag(self) -> &'static str {
        self.spec().tag
    }

    pub fn title(self) -> &'static str {
        self.spec().title
    }

    /// Code inserted into a freshly added editor
    pub fn placeholder_code(self) -> String {
        let spec = self.spec();
        format!(
            "{} New {} code here {}",
            spec.comment_open,
            spec.tag.to_uppercase(),
            spec.comment_close
        )
    }

    /// Find the language whose conventional file name matches
    pub fn from_file_name(name: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|lang| lang.spec().file_name == name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_tags() {
        assert_eq!("html".parse::<Language>().unwrap(), Language::Html);
        assert_eq!("CSS".parse::<Language>().unwrap(), Language::Css);
        assert_eq!(" js ".parse::<Language>().unwrap(), Language::Js);
        assert!("ts".parse::<Language>().is_err());
    }

    #[test]
    fn test_placeholder_uses_language_comment_syntax() {
        assert_eq!(Language::Html.placeholder_code(), "<!-- New HTML code here -->");
        assert_eq!(Language::Css.placeholder_code(), "/* New CSS code here */");
        assert_eq!(Language::Js.placeholder_code(), "/* New JS code here */");
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Language::Js).unwrap(), "\"js\"");
        let lang: Language = serde_json::from_str("\"css\"").unwrap();
        assert_eq!(lang, Language::Css);
    }

    #[test]
    fn test_lookup_by_file_name() {
        assert_eq!(Language::from_file_name("style.css"), Some(Language::Css));
        assert_eq!(Language::from_file_name("main.rs"), None);
    }
}
