use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL (may be empty - this is a fact, not an error)
    pub api_base_url: String,

    /// Bearer token sent with API requests; empty means anonymous
    pub api_token: String,

    /// HTTP request timeout in seconds, 0 when unset
    pub request_timeout_secs: u64,

    /// Directory for log files (path info only, no existence check)
    pub log_dir: PathBuf,

    /// Whether to also write logs to a file
    pub log_to_file: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: toml_value
                .get("api")
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            api_token: toml_value
                .get("api")
                .and_then(|a| a.get("token"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: toml_value
                .get("api")
                .and_then(|a| a.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_to_file: toml_value
                .get("logging")
                .and_then(|l| l.get("to_file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_token: String::new(),
            request_timeout_secs: 0,
            log_dir: PathBuf::new(),
            log_to_file: false,
        }
    }
}
