use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Lowercase, decompose, keep only `a-z`
    ///
    /// `scrībō` becomes `scribo`: the macron is split off by the
    /// decomposition and then dropped with every other non-letter.
    fn process(&self, text: &str) -> String {
        text.to_lowercase()
            .nfd()
            .filter(|c| c.is_ascii_lowercase())
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Strip a leading infinitive marker (`to` plus any whitespace) from an English gloss
pub fn base_gloss(english: &str) -> &str {
    let trimmed = english.trim();

    match (trimmed.get(..2), trimmed.get(2..)) {
        (Some(marker), Some(rest))
            if marker.eq_ignore_ascii_case("to") && rest.starts_with(char::is_whitespace) =>
        {
            rest.trim()
        }
        _ => trimmed,
    }
}
