use std::time::Duration;

use async_trait::async_trait;
use mnema_config::generator::GeneratorConfig;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{GenerateError, Generation, GenerationRequest, ProviderMetadata, TextGenerator};

/// Longest upstream error body kept in an error message
const ERROR_SNIPPET_LEN: usize = 400;

#[derive(Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, api_url: String, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to default HTTP client: {e}");
                reqwest::Client::new()
            });

        Self {
            client,
            api_key,
            api_url,
            model,
        }
    }

    /// Build a generator from config, `None` when no credential is set
    pub fn from_config(config: &GeneratorConfig) -> Option<Self> {
        let api_key = config.api_key()?;

        Some(Self::new(
            api_key.to_string(),
            config.api_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_seconds),
        ))
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.api_url.trim_end_matches('/'), model)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::AuthenticationError);
        }

        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };

        let body = GeminiRequest::from(request);

        tracing::debug!(model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if let Some(err) = status_error(status, &text) {
            return Err(err);
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| GenerateError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        parsed.into_generation()
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
        }
    }
}

/// Pull `error.message` out of an upstream error body, or keep a snippet of it
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
    {
        return format!("HTTP {}: {}", status.as_u16(), msg);
    }

    let snippet: String = body.trim().chars().take(ERROR_SNIPPET_LEN).collect();
    format!("HTTP {}: {}", status.as_u16(), snippet)
}

/// Map a non-success upstream status to its error
fn status_error(status: StatusCode, body: &str) -> Option<GenerateError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Some(GenerateError::RateLimitExceeded);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Some(GenerateError::AuthenticationError);
    }

    if !status.is_success() {
        return Some(GenerateError::ApiError(extract_error_message(status, body)));
    }

    None
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

impl From<&GenerationRequest> for GeminiRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: request.system_instruction.clone(),
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: request.user_instruction.clone(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

impl GeminiResponse {
    /// Join the first candidate's text parts
    fn into_generation(self) -> Result<Generation, GenerateError> {
        if let Some(usage) = &self.usage_metadata {
            tracing::debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                "generateContent usage"
            );
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerateError::InvalidResponse("No candidates in response".into()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        Ok(Generation {
            text,
            provider: "gemini".to_string(),
            finish_reason: candidate.finish_reason,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-1.5-flash".to_string(),
            system_instruction: "system".to_string(),
            user_instruction: "user".to_string(),
            temperature: 0.7,
            max_output_tokens: 80,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GeminiRequest::from(&request())).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "system");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "user");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 80);
    }

    fn generation_from(raw: &str) -> Result<Generation, GenerateError> {
        serde_json::from_str::<GeminiResponse>(raw)
            .unwrap()
            .into_generation()
    }

    #[test]
    fn test_response_parts_are_joined() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "{\"hint\":"}, {"text": "\"x\"}"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }"#;
        let generation = generation_from(raw).unwrap();

        assert_eq!(generation.text, r#"{"hint":"x"}"#);
        assert_eq!(generation.provider, "gemini");
        assert_eq!(generation.finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_only_first_candidate_is_used() {
        let raw = r#"{"candidates": [
            {"content": {"parts": [{"text": "first"}]}},
            {"content": {"parts": [{"text": "second"}]}}
        ]}"#;
        assert_eq!(generation_from(raw).unwrap().text, "first");
    }

    #[test]
    fn test_candidate_without_content_is_empty_text() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let generation = generation_from(raw).unwrap();
        assert_eq!(generation.text, "");
        assert_eq!(generation.finish_reason.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn test_no_candidates_is_invalid_response() {
        for raw in [r#"{"candidates": []}"#, "{}"] {
            let err = generation_from(raw).unwrap_err();
            assert!(matches!(err, GenerateError::InvalidResponse(_)), "{raw}");
        }
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            Some(GenerateError::RateLimitExceeded)
        ));
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, ""),
            Some(GenerateError::AuthenticationError)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, ""),
            Some(GenerateError::AuthenticationError)
        ));

        match status_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":{"message":"backend unavailable"}}"#,
        ) {
            Some(GenerateError::ApiError(msg)) => assert_eq!(msg, "HTTP 500: backend unavailable"),
            other => panic!("unexpected: {other:?}"),
        }

        assert!(status_error(StatusCode::OK, "").is_none());
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded"}}"#;
        assert_eq!(
            extract_error_message(StatusCode::BAD_REQUEST, body),
            "HTTP 400: Quota exceeded"
        );

        let long = "x".repeat(1000);
        let msg = extract_error_message(StatusCode::BAD_GATEWAY, &long);
        assert_eq!(msg.len(), "HTTP 502: ".len() + ERROR_SNIPPET_LEN);
    }

    #[test]
    fn test_from_config_requires_key() {
        assert!(GeminiGenerator::from_config(&GeneratorConfig::default()).is_none());

        let config = GeneratorConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let generator = GeminiGenerator::from_config(&config).unwrap();
        assert_eq!(generator.default_model(), "gemini-1.5-flash");
        assert_eq!(
            generator.endpoint("gemini-1.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_empty_key_is_authentication_error() {
        let generator = GeminiGenerator::new(
            String::new(),
            "http://127.0.0.1:9".to_string(),
            "m".to_string(),
            Duration::from_secs(1),
        );
        let err = generator.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerateError::AuthenticationError));
    }
}
