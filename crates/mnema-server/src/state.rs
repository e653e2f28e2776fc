use std::sync::Arc;

use mnema_config::Config;
use mnema_core::{HintService, HintSettings};
use mnema_generator::{GeminiGenerator, TextGenerator};
use mnema_lang_latin::LatinHinter;

pub struct AppState {
    pub config: Config,
    pub service: HintService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let service = Self::build_service(&config);
        Self::with_service(config, service)
    }

    pub fn with_service(config: Config, service: HintService) -> Self {
        Self { config, service }
    }

    /// Latin hinter plus Gemini when a key is configured
    pub fn build_service(config: &Config) -> HintService {
        let generator = GeminiGenerator::from_config(&config.generator)
            .map(|g| Arc::new(g) as Arc<dyn TextGenerator>);

        HintService::new(
            Arc::new(LatinHinter::new()),
            generator,
            HintSettings::from(&config.generator),
        )
    }
}
