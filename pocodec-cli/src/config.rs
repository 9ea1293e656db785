//! Translation job configuration, read from a YAML file.

use serde::Deserialize;
use std::fs;

use crate::validation::{validate_file_path, validate_language_code};

pub const DEFAULT_CONFIG_PATH: &str = ".pocodec.yml";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/translate";

/// One catalog to translate and the language to translate it into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub path: String,
    pub lang: String,
}

/// Settings of the HTTP translation backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub endpoint: String,
    /// Name of the environment variable holding the API key, if the service
    /// needs one.
    pub api_key_env: Option<String>,
    pub timeout_secs: u64,
    pub max_chunk_len: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: None,
            timeout_secs: 60,
            max_chunk_len: pocodec::translator::DEFAULT_MAX_LEN,
        }
    }
}

impl BackendConfig {
    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<Option<String>, String> {
        match &self.api_key_env {
            None => Ok(None),
            Some(var) => std::env::var(var)
                .map(Some)
                .map_err(|_| format!("API key variable {} is not set", var)),
        }
    }
}

fn default_source_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Language of every msgid.
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub files: Vec<FileConfig>,
}

impl Config {
    /// Loads and validates the configuration at `path`.
    pub fn load(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Error reading config file {}: {}", path, e))?;
        let config = Self::from_yaml_str(&content)?;
        config
            .validate()
            .map_err(|e| format!("Invalid configuration: {}", e))?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Error parsing YAML config: {}", e))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.files.is_empty() {
            return Err("no files specified in configuration".to_string());
        }
        validate_language_code(&self.source_lang)
            .map_err(|e| format!("source_lang: {}", e))?;
        if self.backend.max_chunk_len == 0 {
            return Err("backend.max_chunk_len must be positive".to_string());
        }

        for file in &self.files {
            if file.path.trim().is_empty() {
                return Err("file path is empty".to_string());
            }
            if file.lang.trim().is_empty() {
                return Err(format!("language is empty for file {}", file.path));
            }
            validate_language_code(&file.lang)
                .map_err(|e| format!("{}: {}", file.path, e))?;
            validate_file_path(&file.path)?;
        }
        Ok(())
    }
}
