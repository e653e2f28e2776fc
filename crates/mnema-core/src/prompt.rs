/// Word limit the model is asked to respect
pub const MAX_HINT_WORDS: usize = 16;

/// The two instruction blocks sent to the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintPrompt {
    pub system: String,
    pub user: String,
}

pub fn build_prompt(language: &str, lemma: &str, english: &str, entry: Option<&str>) -> HintPrompt {
    HintPrompt {
        system: system_instruction(language),
        user: user_instruction(language, lemma, english, entry),
    }
}

fn system_instruction(language: &str) -> String {
    format!(
        "You write memory hints for students learning {language} vocabulary. \
         Output exactly ONE short hint in English only. \
         Never output the {language} word itself as a standalone word. \
         Prefer a genuine English derivative or cognate of the word. \
         If there is none, use a simple sound-alike or conceptual association instead. \
         Keep the hint to at most {MAX_HINT_WORDS} words. \
         Use plain text: no markdown, no quotation marks. \
         Respond with a minified JSON object of the form {{\"hint\":\"...\"}} and nothing else."
    )
}

fn user_instruction(language: &str, lemma: &str, english: &str, entry: Option<&str>) -> String {
    let mut p = String::new();

    p.push_str(&format!(
        "{language} lemma (do not output as a standalone word): {lemma}\n"
    ));

    if let Some(entry) = entry.map(str::trim).filter(|e| !e.is_empty()) {
        p.push_str(&format!("Dictionary entry: {entry}\n"));
    }

    p.push_str(&format!("English meaning: {english}\n"));
    p.push_str("Return only minified JSON: {\"hint\":\"...\"}");

    p
}
