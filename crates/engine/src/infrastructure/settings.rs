//! Process configuration.
//!
//! Two layers, both read once at startup:
//! - the environment (optionally seeded from `.env`) for connection details;
//! - a YAML file of named LLM profiles, e.g.
//!
//! ```yaml
//! local:
//!   model: lmstudio-community/Meta-Llama-3-8B-Instruct-GGUF
//! openai:
//!   model: gpt-4o-mini
//!   base_url: https://api.openai.com/v1
//!   timeout_secs: 60
//! ```
//!
//! An unknown profile name resolves to an empty profile, not an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::openai::{DEFAULT_LLM_API_KEY, DEFAULT_LLM_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Model used when the selected profile does not name one.
pub const DEFAULT_LLM_MODEL: &str = "lmstudio-community/Meta-Llama-3-8B-Instruct-GGUF";

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/dungeonmaster";
pub const DEFAULT_LLM_CONFIG_PATH: &str = "llm_config.yml";
pub const DEFAULT_SESSION_ID: i64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read LLM profiles from {path}: {message}")]
    ProfileFile { path: String, message: String },
    #[error("LLM profile '{name}' is malformed: {message}")]
    MalformedProfile { name: String, message: String },
    #[error("{key} must be an integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

// =============================================================================
// Environment
// =============================================================================

/// Settings taken from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub database_url: String,
    pub llm_base_url: String,
    pub llm_api_key: String,
    pub llm_config_path: PathBuf,
    /// Profile to select from the LLM config file; `None` selects nothing
    pub llm_profile: Option<String>,
    /// Raw session id to narrate; validated by the caller
    pub session_id: i64,
}

impl AppSettings {
    /// Load settings from environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let session_id = match non_empty("SESSION_ID") {
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidNumber {
                key: "SESSION_ID",
                value: raw,
            })?,
            None => DEFAULT_SESSION_ID,
        };

        Ok(Self {
            database_url: non_empty("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            llm_base_url: non_empty("LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            llm_api_key: non_empty("LLM_API_KEY")
                .or_else(|| non_empty("OPENAI_API_KEY"))
                .unwrap_or_else(|| DEFAULT_LLM_API_KEY.to_string()),
            llm_config_path: non_empty("LLM_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LLM_CONFIG_PATH)),
            llm_profile: non_empty("LLM_PROFILE"),
            session_id,
        })
    }
}

// =============================================================================
// LLM Profiles
// =============================================================================

/// One named entry from the LLM config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LlmProfile {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved LLM client settings (profile over environment over defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmClientSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl LlmProfile {
    pub fn resolve(self, app: &AppSettings) -> LlmClientSettings {
        LlmClientSettings {
            base_url: self.base_url.unwrap_or_else(|| app.llm_base_url.clone()),
            api_key: self.api_key.unwrap_or_else(|| app.llm_api_key.clone()),
            model: self.model.unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// The parsed LLM config file.
pub struct LlmProfiles {
    source: config::Config,
}

impl LlmProfiles {
    /// Read the profile file. A missing file yields an empty profile set.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No LLM profile file; using defaults");
            return Ok(Self::empty());
        }

        let source = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Yaml))
            .build()
            .map_err(|e| SettingsError::ProfileFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { source })
    }

    pub fn empty() -> Self {
        Self {
            source: config::Config::default(),
        }
    }

    /// Look up a profile by name. `None` or an unknown name gives an empty profile.
    pub fn profile(&self, name: Option<&str>) -> Result<LlmProfile, SettingsError> {
        let Some(name) = name else {
            return Ok(LlmProfile::default());
        };

        match self.source.get::<LlmProfile>(name) {
            Ok(profile) => Ok(profile),
            Err(config::ConfigError::NotFound(_)) => {
                tracing::warn!(profile = name, "Unknown LLM profile; using defaults");
                Ok(LlmProfile::default())
            }
            Err(e) => Err(SettingsError::MalformedProfile {
                name: name.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<AppSettings, SettingsError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppSettings::from_lookup(|key| env.get(key).cloned())
    }

    fn write_profiles(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("llm_config.yml");
        fs::write(&path, contents).expect("write profile file");
        (dir, path)
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let settings = settings_from(&[]).expect("defaults");

        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.llm_base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(settings.llm_api_key, DEFAULT_LLM_API_KEY);
        assert_eq!(settings.llm_config_path, PathBuf::from(DEFAULT_LLM_CONFIG_PATH));
        assert_eq!(settings.llm_profile, None);
        assert_eq!(settings.session_id, 1);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = settings_from(&[
            ("DATABASE_URL", "postgres://db/world"),
            ("LLM_PROFILE", "local"),
            ("SESSION_ID", " 7 "),
            ("OPENAI_API_KEY", "sk-test"),
        ])
        .expect("settings");

        assert_eq!(settings.database_url, "postgres://db/world");
        assert_eq!(settings.llm_profile.as_deref(), Some("local"));
        assert_eq!(settings.session_id, 7);
        assert_eq!(settings.llm_api_key, "sk-test");
    }

    #[test]
    fn non_numeric_session_id_is_rejected() {
        let result = settings_from(&[("SESSION_ID", "first")]);
        assert!(matches!(
            result,
            Err(SettingsError::InvalidNumber { key: "SESSION_ID", .. })
        ));
    }

    #[test]
    fn named_profile_is_read_from_yaml() {
        let (_dir, path) = write_profiles(
            "local:\n  model: llama-3-8b\n  timeout_secs: 30\nremote:\n  model: gpt-4o-mini\n  base_url: https://api.openai.com/v1\n",
        );
        let profiles = LlmProfiles::load(&path).expect("load profiles");

        let local = profiles.profile(Some("local")).expect("local profile");
        assert_eq!(local.model.as_deref(), Some("llama-3-8b"));
        assert_eq!(local.timeout_secs, Some(30));
        assert_eq!(local.base_url, None);

        let remote = profiles.profile(Some("remote")).expect("remote profile");
        assert_eq!(remote.base_url.as_deref(), Some("https://api.openai.com/v1"));
    }

    #[test]
    fn unknown_profile_is_empty_not_error() {
        let (_dir, path) = write_profiles("local:\n  model: llama-3-8b\n");
        let profiles = LlmProfiles::load(&path).expect("load profiles");

        assert_eq!(
            profiles.profile(Some("missing")).expect("lookup"),
            LlmProfile::default()
        );
        assert_eq!(profiles.profile(None).expect("lookup"), LlmProfile::default());
    }

    #[test]
    fn missing_file_is_an_empty_profile_set() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let profiles = LlmProfiles::load(&dir.path().join("absent.yml")).expect("load");

        assert_eq!(
            profiles.profile(Some("local")).expect("lookup"),
            LlmProfile::default()
        );
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let (_dir, path) = write_profiles("local: [unclosed\n");
        assert!(matches!(
            LlmProfiles::load(&path),
            Err(SettingsError::ProfileFile { .. })
        ));
    }

    #[test]
    fn profile_takes_precedence_over_environment() {
        let app = settings_from(&[("LLM_BASE_URL", "http://env:1234/v1")]).expect("settings");

        let resolved = LlmProfile {
            model: Some("m".to_string()),
            base_url: Some("http://profile/v1".to_string()),
            ..LlmProfile::default()
        }
        .resolve(&app);
        assert_eq!(resolved.base_url, "http://profile/v1");
        assert_eq!(resolved.model, "m");

        let fallback = LlmProfile::default().resolve(&app);
        assert_eq!(fallback.base_url, "http://env:1234/v1");
        assert_eq!(fallback.model, DEFAULT_LLM_MODEL);
        assert_eq!(fallback.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
