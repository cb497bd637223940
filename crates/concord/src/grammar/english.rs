//! English: indefinite article agreement.
//!
//! English words do not decline. The only inflecting word is the indefinite
//! article, which becomes `an` before a vowel sound. The vowel test looks at
//! the first letter only (`apple` -> `an`, `pear` -> `a`), so `hour` and
//! `unicorn` come out wrong. It is an approximation, not a phonological model.

use crate::types::{Properties, PropertyValue};

/// Property names English words understand.
pub const PROPERTIES: &[&str] = &["begins_with_vowel"];

/// English has no modifier abbreviations.
pub const SHORTCUTS: &[&str] = &[];

/// English word classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Word,
    IndefiniteArticle,
}

const DICTIONARY: &[(&str, Variant)] = &[
    ("a", Variant::IndefiniteArticle),
    ("an", Variant::IndefiniteArticle),
];

/// Dictionary lookup of a whole word, ignoring ASCII case (`A` is an article
/// too).
pub fn lookup(raw: &str) -> Option<Variant> {
    DICTIONARY
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(raw))
        .map(|(_, variant)| *variant)
}

pub fn guess_type(raw: &str) -> Variant {
    lookup(raw).unwrap_or(Variant::Word)
}

/// Whether `text` starts with one of `a e i o u` (either case).
pub fn begins_with_vowel(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Word => "word",
            Variant::IndefiniteArticle => "indefinite-article",
        }
    }

    pub fn agreement_categories(self) -> &'static [&'static str] {
        match self {
            Variant::Word => &[],
            Variant::IndefiniteArticle => PROPERTIES,
        }
    }

    /// Properties every English word exposes to agreement.
    pub fn property(self, text: &str, name: &str) -> Option<PropertyValue> {
        match name {
            "begins_with_vowel" => Some(PropertyValue::Bool(begins_with_vowel(text))),
            _ => None,
        }
    }

    /// Without `begins_with_vowel` the article is left as written; otherwise
    /// its first letter is kept (so `A` stays capitalised) and `n` is added
    /// before a vowel.
    pub fn inflect(self, text: &str, properties: &Properties) -> String {
        match self {
            Variant::Word => text.to_string(),
            Variant::IndefiniteArticle => {
                let (Some(vowel), Some(first)) =
                    (properties.get("begins_with_vowel"), text.chars().next())
                else {
                    return text.to_string();
                };
                if vowel.is_truthy() {
                    format!("{first}n")
                } else {
                    first.to_string()
                }
            }
        }
    }

    pub fn paradigm_keys(self) -> Vec<Properties> {
        match self {
            Variant::Word => vec![Properties::new()],
            Variant::IndefiniteArticle => vec![
                Properties::new().with("begins_with_vowel", false),
                Properties::new().with("begins_with_vowel", true),
            ],
        }
    }
}
