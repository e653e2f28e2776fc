use regex::RegexBuilder;

/// True if `lemma` appears in `hint` as a standalone word, ignoring case
///
/// The lemma is untrusted input and is escaped before it becomes a pattern.
/// Only the exact headword is checked; inflected forms are not.
pub fn is_leaking(hint: &str, lemma: &str) -> bool {
    let lemma = lemma.trim();
    if lemma.is_empty() {
        return false;
    }

    let pattern = format!(r"\b{}\b", regex::escape(lemma));

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(hint),
        Err(e) => {
            // An oversized lemma cannot be checked, so treat it as a leak
            tracing::warn!("could not build leak matcher: {e}");
            true
        }
    }
}
