use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::generator::GeneratorConfig;
use self::server::ServerConfig;

pub mod generator;
pub mod server;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub server: ServerConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = lookup("LOG_FORMAT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Config {
            generator: GeneratorConfig::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup),
            log_format,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Parse a variable, keeping `default` when it is unset or malformed
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::default();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.generator.api_key().is_none());
        assert_eq!(config.generator.model, "gemini-1.5-flash");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_json_log_format() {
        let config = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "JSON")]));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")]));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_malformed_numbers_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("HINT_TIMEOUT_SECONDS", "-3"),
            ("HINT_TEMPERATURE", "warm"),
        ]));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generator.timeout_seconds, 15);
        assert_eq!(config.generator.temperature, 0.7);
    }
}
