use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of a hint request.
///
/// Every field defaults to empty so a partial body still deserializes and
/// gets handled as missing input instead of a transport error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintRequest {
    pub lemma: String,
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl HintRequest {
    pub fn new(lemma: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            english: english.into(),
            entry: None,
        }
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    /// Trimmed lemma and english, or `None` if either is blank
    pub fn normalized(&self) -> Option<(&str, &str)> {
        let lemma = self.lemma.trim();
        let english = self.english.trim();

        if lemma.is_empty() || english.is_empty() {
            None
        } else {
            Some((lemma, english))
        }
    }

    /// Dictionary entry, if present and not blank
    pub fn entry(&self) -> Option<&str> {
        self.entry
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

/// Final response body. `hint` is always present, empty means no hint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResult {
    pub hint: String,
}

impl HintResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<String> for HintResult {
    fn from(hint: String) -> Self {
        Self { hint }
    }
}

/// A hint that has not been validated yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintCandidate {
    pub text: String,
}

impl HintCandidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Why the fallback engine produced the hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No generator credential configured
    NoCredential,
    /// Generator call failed or timed out
    UpstreamFailure,
    /// Generator replied without a usable `hint`
    UnparseableResponse,
    /// Generated hint contained the lemma
    SafetyViolation,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FallbackReason::NoCredential => "no_credential",
            FallbackReason::UpstreamFailure => "upstream_failure",
            FallbackReason::UnparseableResponse => "unparseable_response",
            FallbackReason::SafetyViolation => "safety_violation",
        };
        f.write_str(name)
    }
}

/// Which path produced a [`HintResult`]. Internal only, never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// Lemma or english was missing
    Empty,
    Generated,
    Fallback(FallbackReason),
}
