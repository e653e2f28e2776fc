use serde::{Deserialize, Serialize};

use crate::parse_or;

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    80
}

fn default_timeout_seconds() -> u64 {
    15
}

/// Settings for the external text-generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Credential. Unset or blank disables generation.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl GeneratorConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let model = lookup("GEMINI_MODEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_model);

        let api_url = lookup("GEMINI_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_api_url);

        let temperature = parse_or(lookup, "HINT_TEMPERATURE", default_temperature());
        let max_output_tokens =
            parse_or(lookup, "HINT_MAX_OUTPUT_TOKENS", default_max_output_tokens());
        let timeout_seconds = parse_or(lookup, "HINT_TIMEOUT_SECONDS", default_timeout_seconds());

        Self {
            api_key: lookup("GEMINI_API_KEY"),
            model,
            api_url,
            temperature,
            max_output_tokens,
            timeout_seconds,
        }
    }

    /// Credential if one is configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_url: default_api_url(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
