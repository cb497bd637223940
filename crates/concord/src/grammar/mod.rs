//! Per-language word systems.
//!
//! Each supported language contributes a closed set of word classes
//! ([`Variant`]), a spelling-based dispatch rule that picks the class for a
//! raw string, default properties per class and an inflection rule. Tables
//! are static and never mutated, so words can be shared freely across threads.

pub mod czech;
pub mod english;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Properties, PropertyValue};

/// A language whose word system formats templates.
///
/// [`Language::Neutral`] has a single, non-inflecting word class and is used
/// for any language without a word system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Neutral,
    English,
    Czech,
}

/// Error returned when parsing an unrecognised language name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}' (expected one of: en, cs, neutral)")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 3] = [Language::Neutral, Language::English, Language::Czech];

    /// Resolve a locale code such as `cs`, `cs_CZ` or `en-GB.UTF-8`.
    ///
    /// Only the primary subtag is considered. Unknown languages map to
    /// [`Language::Neutral`].
    pub fn from_code(code: &str) -> Language {
        let primary = code
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Language::English,
            "cs" => Language::Czech,
            _ => Language::Neutral,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Neutral => "und",
            Language::English => "en",
            Language::Czech => "cs",
        }
    }

    /// Dictionary lookup of an exact surface form.
    pub fn lookup(self, raw: &str) -> Option<Variant> {
        match self {
            Language::English => english::lookup(raw).map(Variant::English),
            Language::Neutral | Language::Czech => None,
        }
    }

    /// Map a raw string to the word class that should own it.
    ///
    /// Total and deterministic: strings that match no specific pattern get the
    /// language's plain word class.
    pub fn guess_type(self, raw: &str) -> Variant {
        let variant = match self {
            Language::Neutral => Variant::Neutral,
            Language::English => Variant::English(english::guess_type(raw)),
            Language::Czech => Variant::Czech(czech::guess_type(raw)),
        };
        if variant.is_plain() {
            trace!("{self}: no word class matched {raw:?}, using plain word");
        }
        variant
    }

    /// Property names this language's word classes read.
    pub fn properties(self) -> &'static [&'static str] {
        match self {
            Language::Neutral => &[],
            Language::English => english::PROPERTIES,
            Language::Czech => czech::PROPERTIES,
        }
    }

    /// Bare modifier abbreviations this language accepts.
    pub fn shortcut_names(self) -> &'static [&'static str] {
        match self {
            Language::Neutral => &[],
            Language::English => english::SHORTCUTS,
            Language::Czech => czech::SHORTCUTS,
        }
    }

    /// Expand a bare modifier abbreviation into properties.
    pub fn shortcut(self, name: &str) -> Option<Properties> {
        match self {
            Language::Czech => czech::shortcut(name),
            Language::Neutral | Language::English => None,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "cs" | "czech" => Ok(Language::Czech),
            "und" | "neutral" => Ok(Language::Neutral),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// A word class, tagged with the language it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Neutral,
    English(english::Variant),
    Czech(czech::Variant),
}

impl Variant {
    pub fn language(self) -> Language {
        match self {
            Variant::Neutral => Language::Neutral,
            Variant::English(_) => Language::English,
            Variant::Czech(_) => Language::Czech,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Neutral => "word",
            Variant::English(v) => v.name(),
            Variant::Czech(v) => v.name(),
        }
    }

    /// Whether this is the language's fallback class.
    pub fn is_plain(self) -> bool {
        matches!(
            self,
            Variant::Neutral
                | Variant::English(english::Variant::Word)
                | Variant::Czech(czech::Variant::Word)
        )
    }

    /// Default property values of this class.
    pub fn defaults(self) -> Properties {
        match self {
            Variant::Neutral | Variant::English(_) => Properties::new(),
            Variant::Czech(v) => v.defaults(),
        }
    }

    /// Properties this class copies from a word it agrees with.
    pub fn agreement_categories(self) -> &'static [&'static str] {
        match self {
            Variant::Neutral => &[],
            Variant::English(v) => v.agreement_categories(),
            Variant::Czech(v) => v.agreement_categories(),
        }
    }

    /// The root that inflection endings are appended to.
    pub fn stem(self, text: &str) -> String {
        match self {
            Variant::Czech(v) => v.stem(text),
            Variant::Neutral | Variant::English(_) => text.to_string(),
        }
    }

    /// A property of a word of this class: its default, or one derived from
    /// its spelling.
    pub fn property(self, text: &str, name: &str) -> Option<PropertyValue> {
        if let Some(value) = self.defaults().get(name) {
            return Some(value.clone());
        }
        match self {
            Variant::English(v) => v.property(text, name),
            Variant::Neutral | Variant::Czech(_) => None,
        }
    }

    /// Surface form for fully merged properties. Pure: the same inputs always
    /// give the same output.
    pub fn inflect(
        self,
        root: &str,
        text: &str,
        properties: &Properties,
    ) -> Result<String, InflectionError> {
        match self {
            Variant::Neutral => Ok(text.to_string()),
            Variant::English(v) => Ok(v.inflect(text, properties)),
            Variant::Czech(v) => v.inflect(root, text, properties),
        }
    }

    /// Property combinations the class distinguishes, in table order.
    pub fn paradigm_keys(self) -> Vec<Properties> {
        match self {
            Variant::Neutral => vec![Properties::new()],
            Variant::English(v) => v.paradigm_keys(),
            Variant::Czech(v) => v.paradigm_keys(),
        }
    }
}

/// A recognised property carried a value the word class cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InflectionError {
    #[error("invalid value '{value}' for property '{property}'")]
    InvalidValue { property: String, value: String },
}

/// One space-free token of a [`Word`] with its class and stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    variant: Variant,
    text: String,
    root: String,
}

impl Lexeme {
    pub fn new(variant: Variant, text: impl Into<String>) -> Self {
        let text = text.into();
        let root = variant.stem(&text);
        Lexeme {
            variant,
            text,
            root,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.variant.property(&self.text, name)
    }

    /// Inflect with `overrides` merged over this lexeme's own defaults.
    pub fn inflect(&self, overrides: &Properties) -> Result<String, InflectionError> {
        let merged = self.variant.defaults().overlaid(overrides);
        self.variant.inflect(&self.root, &self.text, &merged)
    }
}

/// An inflectable value: a single word or a space-separated phrase whose
/// tokens all inflect with the same properties.
///
/// Words are immutable; [`Word::inflect`] returns a new string.
///
/// ```
/// use concord::{Language, Properties, Word};
///
/// let word = Word::new(Language::Czech, "jarní a mladý");
/// let genitive = Properties::new().with("case", 2);
/// assert_eq!(word.inflect(&genitive).unwrap(), "jarního a mladého");
/// assert_eq!(word.to_string(), "jarní a mladý");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    lexemes: Vec<Lexeme>,
}

impl Word {
    /// Build a word of `language`, choosing classes by dispatch.
    ///
    /// Dictionary entries match the whole string first; otherwise a string
    /// containing spaces is split on single spaces and each token is
    /// dispatched on its own.
    pub fn new(language: Language, raw: impl Into<String>) -> Self {
        let text = raw.into();
        let lexemes = match language.lookup(&text) {
            Some(variant) => vec![Lexeme::new(variant, text.as_str())],
            None if text.contains(' ') => text
                .split(' ')
                .map(|token| Lexeme::new(language.guess_type(token), token))
                .collect(),
            None => vec![Lexeme::new(language.guess_type(&text), text.as_str())],
        };
        Word { text, lexemes }
    }

    /// Build a single-lexeme word with an explicit class, skipping dispatch.
    pub fn with_variant(variant: Variant, raw: impl Into<String>) -> Self {
        let text = raw.into();
        let lexemes = vec![Lexeme::new(variant, text.as_str())];
        Word { text, lexemes }
    }

    /// The text as written.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    pub fn is_phrase(&self) -> bool {
        self.lexemes.len() > 1
    }

    /// Class of the first lexeme.
    pub fn variant(&self) -> Variant {
        self.lexemes
            .first()
            .map_or(Variant::Neutral, Lexeme::variant)
    }

    pub fn language(&self) -> Language {
        self.variant().language()
    }

    /// The value of a property as seen by agreement: taken from the first
    /// lexeme that has it.
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.lexemes.iter().find_map(|lexeme| lexeme.property(name))
    }

    /// Properties any lexeme wants copied from an agreement source, without
    /// duplicates.
    pub fn agreement_categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for lexeme in &self.lexemes {
            for category in lexeme.variant.agreement_categories() {
                if !categories.contains(category) {
                    categories.push(category);
                }
            }
        }
        categories
    }

    /// Inflect every lexeme with `overrides` over its own defaults and join
    /// the results with single spaces.
    pub fn inflect(&self, overrides: &Properties) -> Result<String, InflectionError> {
        let forms = self
            .lexemes
            .iter()
            .map(|lexeme| lexeme.inflect(overrides))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(forms.join(" "))
    }

    /// Every form the first lexeme's class distinguishes, applied to the
    /// whole word.
    pub fn paradigm(&self) -> Result<Vec<(Properties, String)>, InflectionError> {
        self.variant()
            .paradigm_keys()
            .into_iter()
            .map(|key| {
                let form = self.inflect(&key)?;
                Ok((key, form))
            })
            .collect()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.text)
    }
}
