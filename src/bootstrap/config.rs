//! # Configuration Loader
//!
//! Two steps, kept apart on purpose:
//!
//! - [`load_config`] reads the TOML file into the [`AppConfig`] DTO and
//!   accepts whatever is in it.
//! - [`resolve_config`] layers environment overrides and defaults on top.

use anyhow::Context;
use std::path::PathBuf;
use fw_core::config::AppConfig;

pub const ENV_API_BASE_URL: &str = "FELLOWSHIP_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "FELLOWSHIP_API_TOKEN";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const APP_DIR_NAME: &str = "fellowship";

/// Load configuration from a TOML file
///
/// **NO validation is performed**: empty strings and missing sections come
/// back as empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Apply process environment overrides and defaults.
///
/// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
pub fn resolve_config(config: AppConfig) -> AppConfig {
    resolve_config_with(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve_config`] with an injectable environment lookup.
pub fn resolve_config_with<F>(mut config: AppConfig, env: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = env(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = base_url;
    }
    if let Some(token) = env(ENV_API_TOKEN).filter(|v| !v.trim().is_empty()) {
        config.api_token = token;
    }
    if config.request_timeout_secs == 0 {
        config.request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
    }
    if config.log_dir.as_os_str().is_empty() {
        config.log_dir = default_log_dir();
    }
    config
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [api]
            base_url = "https://api.fellowship.test"
            token = "abc"
            request_timeout_secs = 10

            [logging]
            dir = "/tmp/fellowship-logs"
            to_file = true
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.api_base_url, "https://api.fellowship.test");
        assert_eq!(config.api_token, "abc");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/fellowship-logs"));
        assert!(config.log_to_file);
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let temp_file = write_config("[api]\n[logging]\n");

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let temp_file = write_config("[api\nbase_url = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/fellowship.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_config_applies_defaults() {
        let config = resolve_config_with(AppConfig::empty(), |_| None);

        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(!config.log_dir.as_os_str().is_empty());
        assert_eq!(config.api_base_url, "");
    }

    #[test]
    fn test_resolve_config_env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_BASE_URL, "https://staging.fellowship.test"),
            (ENV_API_TOKEN, "from-env"),
        ]);
        let mut file_config = AppConfig::empty();
        file_config.api_base_url = "https://api.fellowship.test".to_string();
        file_config.request_timeout_secs = 5;
        file_config.log_dir = PathBuf::from("/var/log/fellowship");

        let config = resolve_config_with(file_config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_base_url, "https://staging.fellowship.test");
        assert_eq!(config.api_token, "from-env");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/fellowship"));
    }

    #[test]
    fn test_resolve_config_ignores_blank_env_values() {
        let mut file_config = AppConfig::empty();
        file_config.api_base_url = "https://api.fellowship.test".to_string();

        let config = resolve_config_with(file_config, |_| Some("  ".to_string()));

        assert_eq!(config.api_base_url, "https://api.fellowship.test");
        assert_eq!(config.api_token, "");
    }
}
