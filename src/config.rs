//! Configuration handling for the TUI

use crate::state::ValidationPolicy;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log file name inside the data directory
const LOG_FILE_NAME: &str = "formsmith-tui.log";

/// Environment variable overriding `auth_url`
pub const AUTH_URL_ENV: &str = "FORMSMITH_AUTH_URL";
/// Environment variable overriding `auth_anon_key`
pub const AUTH_ANON_KEY_ENV: &str = "FORMSMITH_AUTH_ANON_KEY";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Identity provider base URL
    pub auth_url: Option<String>,
    /// Public (anon) API key sent with every auth request
    pub auth_anon_key: Option<String>,
    /// Reject attachments on non-file questions and blank options
    pub strict_validation: Option<bool>,
    /// Email prefilled on the sign-in screen
    pub last_email: Option<String>,
    /// Write logs here instead of the default data-directory file
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "formsmith", "formsmith-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where logs are written: `log_file` if set, else the per-user data
    /// directory. Logs never go to the terminal the UI draws on.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            ProjectDirs::from("dev", "formsmith", "formsmith-tui")
                .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        })
    }

    /// Load configuration from the default location, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        Ok(config.with_overrides(
            std::env::var(AUTH_URL_ENV).ok(),
            std::env::var(AUTH_ANON_KEY_ENV).ok(),
        ))
    }

    /// Load configuration from `path`, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Replace provider settings with non-empty override values
    pub fn with_overrides(mut self, auth_url: Option<String>, anon_key: Option<String>) -> Self {
        if let Some(url) = auth_url.filter(|v| !v.trim().is_empty()) {
            self.auth_url = Some(url);
        }
        if let Some(key) = anon_key.filter(|v| !v.trim().is_empty()) {
            self.auth_anon_key = Some(key);
        }
        self
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        match self.strict_validation {
            Some(false) => ValidationPolicy::Lenient,
            _ => ValidationPolicy::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.auth_url.is_none());
        assert!(config.auth_anon_key.is_none());
        assert!(config.strict_validation.is_none());
        assert!(config.last_email.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            auth_url: Some("https://project.supabase.co".to_string()),
            auth_anon_key: Some("anon".to_string()),
            strict_validation: Some(false),
            last_email: Some("me@example.com".to_string()),
            log_file: Some(PathBuf::from("/tmp/formsmith.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.auth_url,
            Some("https://project.supabase.co".to_string())
        );
        assert_eq!(parsed.auth_anon_key, Some("anon".to_string()));
        assert_eq!(parsed.strict_validation, Some(false));
        assert_eq!(parsed.last_email, Some("me@example.com".to_string()));
        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/formsmith.log")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.auth_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"auth_url": "http://localhost:54321", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.auth_url, Some("http://localhost:54321".to_string()));
    }

    #[test]
    fn test_validation_policy_defaults_to_strict() {
        let mut config = TuiConfig::default();
        assert_eq!(config.validation_policy(), ValidationPolicy::Strict);

        config.strict_validation = Some(true);
        assert_eq!(config.validation_policy(), ValidationPolicy::Strict);

        config.strict_validation = Some(false);
        assert_eq!(config.validation_policy(), ValidationPolicy::Lenient);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = TuiConfig {
            auth_url: Some("http://file".to_string()),
            auth_anon_key: Some("file-key".to_string()),
            ..Default::default()
        }
        .with_overrides(Some("http://env".to_string()), None);

        assert_eq!(config.auth_url, Some("http://env".to_string()));
        assert_eq!(config.auth_anon_key, Some("file-key".to_string()));
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = TuiConfig {
            auth_url: Some("http://file".to_string()),
            ..Default::default()
        }
        .with_overrides(Some("  ".to_string()), Some(String::new()));

        assert_eq!(config.auth_url, Some("http://file".to_string()));
        assert!(config.auth_anon_key.is_none());
    }

    #[test]
    fn test_default_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::default_path();
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.auth_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"last_email": "me@example.com", "strict_validation": false}"#,
        )
        .unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.last_email, Some("me@example.com".to_string()));
        assert_eq!(loaded.validation_policy(), ValidationPolicy::Lenient);
    }

    #[test]
    fn test_log_path_prefers_configured_file() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/tmp/formsmith.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/formsmith.log")));
    }

    #[test]
    fn test_default_log_path_is_not_config_file() {
        let config = TuiConfig::default();
        if let Some(path) = config.log_path() {
            assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
            assert_ne!(Some(path), TuiConfig::default_path());
        }
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
    }
}
