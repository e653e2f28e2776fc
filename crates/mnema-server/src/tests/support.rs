use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mnema_config::Config;
use mnema_core::{HintService, HintSettings};
use mnema_generator::{GenerateError, Generation, GenerationRequest, ProviderMetadata, TextGenerator};
use mnema_lang_latin::LatinHinter;

use crate::state::AppState;

/// Generator that answers every call the same way
pub enum CannedGenerator {
    Reply(String),
    Fail,
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<Generation, GenerateError> {
        match self {
            CannedGenerator::Reply(text) => Ok(Generation {
                text: text.clone(),
                provider: "canned".to_string(),
                finish_reason: None,
            }),
            CannedGenerator::Fail => Err(GenerateError::RateLimitExceeded),
        }
    }

    fn default_model(&self) -> &str {
        "canned-model"
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "canned".to_string(),
        }
    }
}

pub fn service(generator: Option<CannedGenerator>) -> HintService {
    let settings = HintSettings {
        timeout: Duration::from_secs(1),
        ..HintSettings::default()
    };
    let generator = generator.map(|g| Arc::new(g) as Arc<dyn TextGenerator>);
    HintService::new(Arc::new(LatinHinter::new()), generator, settings)
}

pub fn state(generator: Option<CannedGenerator>) -> Arc<AppState> {
    Arc::new(AppState::with_service(Config::default(), service(generator)))
}
