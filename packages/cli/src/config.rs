use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use webplay_compiler_html::CompileOptions;

pub const DEFAULT_CONFIG_NAME: &str = "webplay.config.json";

/// WebPlay project configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted playground state
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Directory containing index.html / style.css / script.js
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Where compiled output and exports are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Skeleton formatting for compiled documents
    #[serde(default)]
    pub compiler_options: CompileOptions,
}

fn default_store_dir() -> String {
    ".webplay".to_string()
}

fn default_src_dir() -> String {
    ".".to_string()
}

fn default_out_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_store_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.store_dir)
    }

    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            compiler_options: CompileOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "storeDir": "state",
            "srcDir": "src",
            "outDir": "dist",
            "compilerOptions": { "pretty": false, "title": "Demo" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.store_dir, "state");
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.out_dir, "dist");
        assert!(!config.compiler_options.pretty);
        assert_eq!(config.compiler_options.title.as_deref(), Some("Demo"));
        assert_eq!(config.compiler_options.lang, "en");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store_dir, ".webplay");
        assert_eq!(config.src_dir, ".");
        assert!(config.compiler_options.pretty);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.out_dir, ".");
    }
}
