use serde_json::{Map, Value};

/// Hard ceiling on the length of a cleaned hint, in characters
pub const MAX_HINT_CHARS: usize = 120;

const QUOTES: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '`'];

pub type JsonObject = Map<String, Value>;

/// Pull a JSON object out of a model reply that may have prose around it
///
/// Tried in order: the whole text, the widest `{...}` that ends the text,
/// then the first `{...}` pair.
pub fn extract_json(text: &str) -> Option<JsonObject> {
    parse_object(text)
        .or_else(|| trailing_object(text).and_then(parse_object))
        .or_else(|| leading_object(text).and_then(parse_object))
}

fn parse_object(text: &str) -> Option<JsonObject> {
    match serde_json::from_str(text.trim()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// From the first `{` to a `}` followed only by whitespace
fn trailing_object(text: &str) -> Option<&str> {
    let body = text.trim_end();
    if !body.ends_with('}') {
        return None;
    }
    let start = body.find('{')?;
    Some(&body[start..])
}

/// From the first `{` to the first `}` after it
fn leading_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let len = text[start..].find('}')?;
    Some(&text[start..=start + len])
}

/// The `hint` field as a string, if present
pub fn hint_field(object: &JsonObject) -> Option<&str> {
    object.get("hint").and_then(Value::as_str)
}

/// Normalize whitespace, strip one layer of quotes, cap the length
pub fn clean_hint(raw: &str) -> String {
    let collapsed = collapse_breaks(raw);
    let mut hint = collapsed.trim();

    if let Some(rest) = hint.strip_prefix(QUOTES) {
        hint = rest;
    }
    if let Some(rest) = hint.strip_suffix(QUOTES) {
        hint = rest;
    }

    hint.chars().take(MAX_HINT_CHARS).collect()
}

/// Each run of `\r`, `\n` or `\t` becomes a single space
fn collapse_breaks(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_break = false;

    for c in raw.chars() {
        if matches!(c, '\r' | '\n' | '\t') {
            if !in_break {
                out.push(' ');
            }
            in_break = true;
        } else {
            out.push(c);
            in_break = false;
        }
    }

    out
}
