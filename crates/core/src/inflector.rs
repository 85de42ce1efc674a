//! English singularization
//!
//! [`EnglishInflector`] is the default [`Inflector`]. It covers the
//! suffix patterns table names usually follow plus a short list of
//! irregular and uncountable nouns. Extra irregular forms can be
//! registered with [`EnglishInflector::with_irregular`].

use crate::traits::Inflector;

/// Nouns whose plural is the same as the singular
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
    "staff",
];

/// `(plural, singular)` pairs the suffix rules get wrong
const IRREGULAR: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("oxen", "ox"),
    ("people", "person"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Rule-based English singularizer
#[derive(Debug, Clone, Default)]
pub struct EnglishInflector {
    extra_irregular: Vec<(String, String)>,
}

impl EnglishInflector {
    /// Create an inflector with the built-in word lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional irregular `plural → singular` mapping.
    ///
    /// Registered pairs take precedence over the built-in lists.
    pub fn with_irregular(mut self, plural: impl Into<String>, singular: impl Into<String>) -> Self {
        self.extra_irregular
            .push((plural.into().to_lowercase(), singular.into()));
        self
    }

    fn singularize_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if let Some((_, singular)) = self.extra_irregular.iter().find(|(p, _)| *p == lower) {
            return singular.clone();
        }
        if UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }
        if let Some((_, singular)) = IRREGULAR.iter().find(|(p, _)| *p == lower) {
            return (*singular).to_string();
        }

        Self::apply_suffix_rules(word)
    }

    fn apply_suffix_rules(word: &str) -> String {
        if word.len() > 3 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{}y", stem);
            }
        }

        if word.ends_with("sses")
            || word.ends_with("xes")
            || word.ends_with("ches")
            || word.ends_with("shes")
        {
            return word[..word.len() - 2].to_string();
        }

        if let Some(stem) = word.strip_suffix("uses") {
            // statuses -> status, but houses -> house
            return match stem.chars().last() {
                Some(c) if !is_vowel(c) => format!("{}us", stem),
                _ => format!("{}use", stem),
            };
        }

        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }

        match word.strip_suffix('s') {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => word.to_string(),
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

impl Inflector for EnglishInflector {
    /// Singularize the final `_`-separated segment of `word`.
    fn singularize(&self, word: &str) -> String {
        match word.rsplit_once('_') {
            Some((head, tail)) if !tail.is_empty() => {
                format!("{}_{}", head, self.singularize_word(tail))
            }
            _ => self.singularize_word(word),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
