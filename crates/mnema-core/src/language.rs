/// Language-specific hint knowledge
pub trait LanguageHinter: Send + Sync {
    /// Human name of the studied language, used in prompts ("Latin")
    fn language_name(&self) -> &str;

    /// Offline hint for a lemma. Must be deterministic and never empty.
    fn fallback_hint(&self, lemma: &str, english: &str) -> String;
}
