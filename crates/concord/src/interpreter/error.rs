//! Error types for formatting.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred while formatting a template.
///
/// Formatting is all-or-nothing: a call either returns the complete string or
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template text is not a valid format spec.
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// A field (or a reference inside a modifier) names an argument that was
    /// not supplied and has no inline literal.
    #[error("missing argument for field '{field}'{}", format_suggestions(suggestions))]
    MissingArgument {
        field: String,
        suggestions: Vec<String>,
    },

    /// A recognised property has a value the word cannot use (`case=9`).
    #[error("field '{field}': invalid value '{value}' for property '{property}'")]
    InvalidProperty {
        field: String,
        property: String,
        value: String,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Names from `available` within a small edit distance of `key`, closest
/// first, at most three.
///
/// Keys of up to three characters allow one edit; longer keys allow two.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
