//! # Configuration DTO
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//!
//! Missing keys map to empty values; filling in defaults is the bootstrap's job.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST API base including the `/api` prefix, e.g. `https://fomo.example/api`
    pub api_base_url: String,

    /// Per-request timeout in seconds (0 = not set)
    pub api_timeout_secs: u64,

    /// Where the host page goes once registration completes
    pub redirect_url: String,

    /// Celebration window before the post-registration redirect
    pub celebration_delay_ms: u64,

    /// Handle reported by the placeholder social auth adapter
    pub social_placeholder_handle: String,

    /// Site language code ("en" / "ru"), unparsed
    pub language: String,

    /// Directory for local state (consent flag, logs)
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let int_at = |section: &str, key: &str| -> u64 {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64
        };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            api_timeout_secs: int_at("api", "timeout_secs"),
            redirect_url: str_at("registration", "redirect_url"),
            celebration_delay_ms: int_at("registration", "celebration_delay_ms"),
            social_placeholder_handle: str_at("registration", "social_placeholder_handle"),
            language: str_at("site", "language"),
            data_dir: PathBuf::from(str_at("storage", "data_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_timeout_secs: 0,
            redirect_url: String::new(),
            celebration_delay_ms: 0,
            social_placeholder_handle: String::new(),
            language: String::new(),
            data_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with the production defaults rooted at `data_dir`.
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            api_base_url: "http://localhost:8001/api".to_string(),
            api_timeout_secs: 10,
            redirect_url: "/platform".to_string(),
            celebration_delay_ms: 3500,
            social_placeholder_handle: "@demo_user".to_string(),
            language: "en".to_string(),
            data_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [api]
            base_url = "https://fomo.example/api"
            timeout_secs = 5

            [registration]
            redirect_url = "/platform"
            celebration_delay_ms = 0
            social_placeholder_handle = "@tester"

            [site]
            language = "ru"

            [storage]
            data_dir = "/var/lib/fomo"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.api_base_url, "https://fomo.example/api");
        assert_eq!(config.api_timeout_secs, 5);
        assert_eq!(config.redirect_url, "/platform");
        assert_eq!(config.celebration_delay_ms, 0);
        assert_eq!(config.social_placeholder_handle, "@tester");
        assert_eq!(config.language, "ru");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/fomo"));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[api]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty values are valid facts
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_does_not_validate_language() {
        let toml_value: Value = toml::from_str("[site]\nlanguage = \"klingon\"").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.language, "klingon");
    }

    #[test]
    fn test_with_system_defaults_roots_paths() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/fomo"));

        assert_eq!(config.data_dir, PathBuf::from("/tmp/fomo"));
        assert_eq!(config.redirect_url, "/platform");
        assert_eq!(config.celebration_delay_ms, 3500);
        assert!(config.api_base_url.ends_with("/api"));
    }
}
