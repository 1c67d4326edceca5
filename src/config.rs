use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WolfcheckError};

/// Name of the JSON file holding the provider credential.
pub const KEY_FILE_NAME: &str = "wolfcheck_key.json";

/// Keys issued by the provider start with this prefix; we only check the
/// convention, never probe the credential against the live service.
const KEY_PREFIX: &str = "gsk_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name sent with every completion request
    pub model: String,

    /// Temperature for completions (low for reproducible review output)
    pub temperature: f32,

    /// Output-token ceiling per completion
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LLM request settings
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                model: "llama-3.3-70b-versatile".to_string(),
                temperature: 0.2,
                max_tokens: 8000,
            },
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| WolfcheckError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => {
                if p.as_ref().exists() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                let candidates = ["wolfcheck.toml", ".wolfcheck.toml"];

                for candidate in &candidates {
                    if Path::new(candidate).exists() {
                        return Self::load(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct KeyFile {
    #[serde(default)]
    api_key: String,
}

/// Resolve the API key at startup by checking, in order: a key file beside
/// the running executable (user override), the current working directory,
/// and the crate source tree (dev mode). First parseable file wins; if none
/// exists the key is empty and every analysis fails fast before any network
/// call.
pub fn resolve_api_key() -> String {
    for candidate in key_file_candidates() {
        match read_key_file(&candidate) {
            Some(key) if !key.is_empty() => {
                tracing::debug!("loaded API key from {}", candidate.display());
                return key;
            }
            _ => continue,
        }
    }
    String::new()
}

fn key_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join(KEY_FILE_NAME));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(KEY_FILE_NAME));
    }
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(KEY_FILE_NAME));

    candidates
}

fn read_key_file(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let parsed: KeyFile = serde_json::from_str(&content).ok()?;
    Some(parsed.api_key)
}

/// Validates the key format by prefix convention only.
pub fn is_plausible_key(key: &str) -> bool {
    !key.is_empty() && key.starts_with(KEY_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_prefix_convention() {
        assert!(is_plausible_key("gsk_abc123"));
        assert!(!is_plausible_key(""));
        assert!(!is_plausible_key("sk-proj-abc123"));
        assert!(!is_plausible_key("GSK_abc123"));
    }

    #[test]
    fn test_key_file_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(KEY_FILE_NAME);

        std::fs::write(&path, r#"{"api_key": "gsk_test"}"#).unwrap();
        assert_eq!(read_key_file(&path).as_deref(), Some("gsk_test"));

        std::fs::write(&path, "not json at all").unwrap();
        assert_eq!(read_key_file(&path), None);

        std::fs::write(&path, r#"{"unrelated": true}"#).unwrap();
        assert_eq!(read_key_file(&path).as_deref(), Some(""));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.llm.max_tokens, 8000);
    }
}
