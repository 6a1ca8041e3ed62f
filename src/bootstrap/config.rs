//! # Configuration Loader
//!
//! - `load_config` reads a TOML file into the `AppConfig` DTO. It accepts
//!   whatever the file says; empty values stay empty.
//! - `resolve_config` is what the binary calls: it picks the file, fills
//!   empty values from the system defaults and applies environment overrides.

use anyhow::Context;
use std::path::PathBuf;

use fomo_core::config::AppConfig;
use fomo_core::i18n::Language;
use fomo_infra::app_dirs::app_data_dir;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const API_BASE_URL_ENV: &str = "FOMO_API_BASE_URL";

/// Load configuration from a TOML file.
///
/// No validation is performed: missing sections result in empty values.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Configuration for this run.
///
/// An explicit path must exist; without one the default file under the
/// application data directory is used when present.
pub fn resolve_config(explicit_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let data_dir = app_data_dir()?;
    let defaults = AppConfig::with_system_defaults(data_dir.clone());

    let loaded = match explicit_path {
        Some(path) => Some(load_config(path)?),
        None => {
            let default_path = data_dir.join(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Some(load_config(default_path)?)
            } else {
                None
            }
        }
    };

    let config = match loaded {
        Some(config) => fill_missing(config, &defaults),
        None => defaults,
    };

    Ok(apply_env_overrides(
        config,
        std::env::var(API_BASE_URL_ENV).ok(),
    ))
}

fn fill_missing(mut config: AppConfig, defaults: &AppConfig) -> AppConfig {
    if config.api_base_url.trim().is_empty() {
        config.api_base_url = defaults.api_base_url.clone();
    }
    if config.api_timeout_secs == 0 {
        config.api_timeout_secs = defaults.api_timeout_secs;
    }
    if config.redirect_url.trim().is_empty() {
        config.redirect_url = defaults.redirect_url.clone();
    }
    if config.social_placeholder_handle.trim().is_empty() {
        config.social_placeholder_handle = defaults.social_placeholder_handle.clone();
    }
    if config.language.trim().is_empty() {
        config.language = defaults.language.clone();
    }
    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = defaults.data_dir.clone();
    }
    // celebration_delay_ms = 0 is a legitimate "redirect immediately"
    config
}

fn apply_env_overrides(mut config: AppConfig, api_base_url: Option<String>) -> AppConfig {
    if let Some(url) = api_base_url.filter(|url| !url.trim().is_empty()) {
        config.api_base_url = url.trim().to_string();
    }
    config
}

/// Site language from `[site] language`; an unsupported value falls back to
/// English with a warning.
pub fn site_language(config: &AppConfig) -> Language {
    match config.language.parse() {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!(language = %config.language, error = %err, "falling back to English");
            Language::default()
        }
    }
}

/// Log directory for the resolved configuration.
pub fn logs_dir(config: &AppConfig) -> PathBuf {
    fomo_infra::app_dirs::logs_dir(&config.data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "https://fomo.example/api"
            timeout_secs = 3

            [registration]
            redirect_url = "/dashboard"
            celebration_delay_ms = 1000
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.api_base_url, "https://fomo.example/api");
        assert_eq!(config.api_timeout_secs, 3);
        assert_eq!(config.redirect_url, "/dashboard");
        assert_eq!(config.celebration_delay_ms, 1000);
        assert_eq!(config.language, "");
    }

    #[test]
    fn test_load_config_fails_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\nbase_url = ").unwrap();

        let result = load_config(temp_file.path().to_path_buf());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let result = load_config(PathBuf::from("/definitely/not/here/config.toml"));

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read config file"));
    }

    #[test]
    fn test_fill_missing_keeps_explicit_values() {
        let defaults = AppConfig::with_system_defaults(PathBuf::from("/tmp/fomo"));
        let mut loaded = AppConfig::empty();
        loaded.redirect_url = "/dashboard".to_string();

        let config = fill_missing(loaded, &defaults);

        assert_eq!(config.redirect_url, "/dashboard");
        assert_eq!(config.api_base_url, defaults.api_base_url);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/fomo"));
        assert_eq!(config.celebration_delay_ms, 0);
    }

    #[test]
    fn test_site_language_falls_back_on_unsupported_value() {
        let mut config = AppConfig::with_system_defaults(PathBuf::from("/tmp/fomo"));
        config.language = "RU".to_string();
        assert_eq!(site_language(&config), Language::Ru);

        config.language = "klingon".to_string();
        assert_eq!(site_language(&config), Language::En);
    }

    #[test]
    fn test_env_override_replaces_base_url() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/fomo"));

        let overridden =
            apply_env_overrides(config.clone(), Some(" https://staging/api ".to_string()));
        assert_eq!(overridden.api_base_url, "https://staging/api");

        let untouched = apply_env_overrides(config.clone(), Some("  ".to_string()));
        assert_eq!(untouched.api_base_url, config.api_base_url);
    }
}
