//! The payload carried alongside each saying.

use serde::{Deserialize, Serialize};

/// Opaque record attached to a saying. The index never compares it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proverb {
    /// English translation; its words feed the translation lookup.
    pub translation: String,
    /// Explanation in Hawaiian.
    pub explanation_haw: String,
    /// Explanation in English.
    pub explanation_eng: String,
}

impl Proverb {
    pub fn new(
        translation: impl Into<String>,
        explanation_haw: impl Into<String>,
        explanation_eng: impl Into<String>,
    ) -> Self {
        Self {
            translation: translation.into(),
            explanation_haw: explanation_haw.into(),
            explanation_eng: explanation_eng.into(),
        }
    }
}

/// A saying with its payload, as stored in dataset files.
///
/// ```json
/// { "saying": "Piliʻuhane", "translation": "Spirit bond",
///   "explanation_haw": "...", "explanation_eng": "..." }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverbRecord {
    pub saying: String,
    #[serde(flatten)]
    pub proverb: Proverb,
}

impl ProverbRecord {
    pub fn new(saying: impl Into<String>, proverb: Proverb) -> Self {
        Self {
            saying: saying.into(),
            proverb,
        }
    }
}
