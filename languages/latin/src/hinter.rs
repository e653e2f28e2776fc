use mnema_core::LanguageHinter;
use mnema_core::preprocess::{DefaultPreprocessor, Preprocessor, base_gloss};

use crate::morphemes::find_rule;

/// Hint used when neither a root nor a gloss is available
pub const GENERIC_HINT: &str = "Picture the meaning.";

/// Deterministic offline hint for a Latin lemma
///
/// Looks for a known root first, then falls back to the English gloss,
/// then to a generic prompt. Never returns an empty string.
///
/// The result is not leak-checked: a lemma that equals its English gloss
/// comes back in the hint.
pub fn fallback_hint(lemma: &str, english: &str) -> String {
    let normalized = DefaultPreprocessor.process(lemma);

    if let Some(rule) = find_rule(&normalized) {
        return rule.hint.to_string();
    }

    let base = base_gloss(english);
    if base.is_empty() {
        GENERIC_HINT.to_string()
    } else {
        format!("Picture the idea: {base}.")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LatinHinter;

impl LatinHinter {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageHinter for LatinHinter {
    fn language_name(&self) -> &str {
        "Latin"
    }

    fn fallback_hint(&self, lemma: &str, english: &str) -> String {
        fallback_hint(lemma, english)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_match() {
        assert_eq!(fallback_hint("portare", "to carry"), "Think: portable.");
        assert_eq!(fallback_hint("Portāre", ""), "Think: portable.");
        assert_eq!(fallback_hint("scrībō, scrībere", "to write"), "Think: scribble, script.");
    }

    #[test]
    fn test_gloss_when_no_root() {
        assert_eq!(fallback_hint("xyzzy", "to wander"), "Picture the idea: wander.");
        assert_eq!(fallback_hint("xyzzy", "  happy "), "Picture the idea: happy.");
        assert_eq!(fallback_hint("xyzzy", "to\twander"), "Picture the idea: wander.");
    }

    #[test]
    fn test_gloss_is_not_leak_checked() {
        assert_eq!(fallback_hint("wander", "to wander"), "Picture the idea: wander.");
    }

    #[test]
    fn test_generic_when_nothing_else() {
        assert_eq!(fallback_hint("amare", ""), GENERIC_HINT);
        assert_eq!(fallback_hint("", ""), GENERIC_HINT);
        assert_eq!(fallback_hint("amare", "   "), GENERIC_HINT);
    }

    #[test]
    fn test_carry_rule_precedes_write_rule() {
        assert_eq!(fallback_hint("transportscribere", "x"), "Think: portable.");
    }

    #[test]
    fn test_deterministic() {
        let first = fallback_hint("ambulare", "to walk");
        for _ in 0..10 {
            assert_eq!(fallback_hint("ambulare", "to walk"), first);
        }
        assert!(!first.is_empty());
    }

    #[test]
    fn test_trait_delegates() {
        let hinter = LatinHinter::new();
        assert_eq!(hinter.language_name(), "Latin");
        assert_eq!(
            hinter.fallback_hint("xyzzy", "to wander"),
            fallback_hint("xyzzy", "to wander")
        );
    }
}
