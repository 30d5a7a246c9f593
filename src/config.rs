/*---------- Imports ----------*/
use std::env;

pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/*---------- Enums ----------*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flattened JSON lines for CloudWatch.
    Json,
    /// Compact human-readable output for local runs.
    Text,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/*---------- Structs ----------*/
/// Process-level settings, read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        let get_optional_string =
            |key: &str| -> Option<String> { env::var(key).ok().filter(|s| !s.trim().is_empty()) };

        let log_format = get_optional_string(LOG_FORMAT_VAR)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or(LogFormat::Json);

        let log_filter =
            get_optional_string(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Self {
            log_format,
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}
