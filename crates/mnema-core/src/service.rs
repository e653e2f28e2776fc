use std::sync::Arc;
use std::time::Duration;

use mnema_config::generator::GeneratorConfig;
use mnema_generator::{GenerateError, GenerationRequest, TextGenerator};
use mnema_types::{FallbackReason, HintCandidate, HintOutcome, HintRequest, HintResult};

use crate::language::LanguageHinter;
use crate::parse::{clean_hint, extract_json, hint_field};
use crate::prompt::build_prompt;
use crate::safety::is_leaking;

/// Per-call generation parameters
#[derive(Debug, Clone)]
pub struct HintSettings {
    /// Empty means the generator's own default
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

impl Default for HintSettings {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for HintSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// Turns a hint request into a hint, always
///
/// Holds no per-request state; one instance is shared by every request.
pub struct HintService {
    hinter: Arc<dyn LanguageHinter>,
    generator: Option<Arc<dyn TextGenerator>>,
    settings: HintSettings,
}

impl HintService {
    pub fn new(
        hinter: Arc<dyn LanguageHinter>,
        generator: Option<Arc<dyn TextGenerator>>,
        settings: HintSettings,
    ) -> Self {
        Self {
            hinter,
            generator,
            settings,
        }
    }

    /// Service that only ever uses the fallback engine
    pub fn offline(hinter: Arc<dyn LanguageHinter>) -> Self {
        Self::new(hinter, None, HintSettings::default())
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Model that generation requests will use
    pub fn model(&self) -> &str {
        match &self.generator {
            Some(generator) if self.settings.model.is_empty() => generator.default_model(),
            _ => &self.settings.model,
        }
    }

    pub async fn hint(&self, request: &HintRequest) -> HintResult {
        self.resolve(request).await.0
    }

    /// Produce the hint together with the path that produced it
    pub async fn resolve(&self, request: &HintRequest) -> (HintResult, HintOutcome) {
        let Some((lemma, english)) = request.normalized() else {
            tracing::debug!("missing lemma or english, returning empty hint");
            return (HintResult::empty(), HintOutcome::Empty);
        };

        let Some(generator) = &self.generator else {
            return self.fallback(lemma, english, FallbackReason::NoCredential);
        };

        match self
            .generate_candidate(generator.as_ref(), lemma, english, request.entry())
            .await
        {
            Ok(candidate) => (HintResult::from(candidate.text), HintOutcome::Generated),
            Err(reason) => self.fallback(lemma, english, reason),
        }
    }

    fn fallback(
        &self,
        lemma: &str,
        english: &str,
        reason: FallbackReason,
    ) -> (HintResult, HintOutcome) {
        tracing::debug!(lemma, %reason, "using fallback hint");
        let hint = self.hinter.fallback_hint(lemma, english);
        (HintResult::from(hint), HintOutcome::Fallback(reason))
    }

    /// Call the generator once and validate what comes back
    async fn generate_candidate(
        &self,
        generator: &dyn TextGenerator,
        lemma: &str,
        english: &str,
        entry: Option<&str>,
    ) -> Result<HintCandidate, FallbackReason> {
        let prompt = build_prompt(self.hinter.language_name(), lemma, english, entry);

        let request = GenerationRequest {
            model: self.settings.model.clone(),
            system_instruction: prompt.system,
            user_instruction: prompt.user,
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
        };

        let generated = tokio::time::timeout(self.settings.timeout, generator.generate(&request))
            .await
            .unwrap_or(Err(GenerateError::Timeout(self.settings.timeout)));

        let generation = generated.map_err(|e| {
            tracing::warn!(
                provider = %generator.metadata().name,
                lemma,
                "hint generation failed: {e}"
            );
            FallbackReason::UpstreamFailure
        })?;

        let candidate = extract_json(&generation.text)
            .as_ref()
            .and_then(hint_field)
            .map(|raw| HintCandidate::new(clean_hint(raw)))
            .unwrap_or_default();

        if candidate.is_empty() {
            tracing::info!(
                finish_reason = ?generation.finish_reason,
                "generator reply had no usable hint"
            );
            return Err(FallbackReason::UnparseableResponse);
        }

        if is_leaking(&candidate.text, lemma) {
            tracing::info!(lemma, "generated hint leaked the lemma, discarding");
            return Err(FallbackReason::SafetyViolation);
        }

        tracing::debug!(provider = %generation.provider, lemma, "using generated hint");
        Ok(candidate)
    }
}
