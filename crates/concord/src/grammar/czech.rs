//! Czech adjective declension.
//!
//! Adjectives decline for seven cases and two numbers; the ending set depends
//! on gender, and masculine adjectives further distinguish animate from
//! inanimate nouns. Hard adjectives end in `-ý` in the dictionary form
//! (`mladý`), soft adjectives in `-í` (`jarní`). Everything else is a plain
//! word that never changes.

use unicode_segmentation::UnicodeSegmentation;

use super::InflectionError;
use crate::types::{Properties, PropertyValue};

/// Property names Czech words understand.
pub const PROPERTIES: &[&str] = &["case", "number", "gender", "animate"];

/// Bare modifier abbreviations, see [`shortcut`].
pub const SHORTCUTS: &[&str] = &[
    "nom", "gen", "dat", "acc", "voc", "loc", "ins", "sg", "pl", "m", "f", "n", "anim", "inan",
];

/// Number of grammatical cases.
pub const CASES: usize = 7;

/// Slots in one inflection table: every case in singular, then in plural.
pub const SLOTS: usize = CASES * 2;

/// Czech word classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Word,
    HardAdjective,
    SoftAdjective,
}

/// Pick the word class from spelling: a trailing `í` marks a soft adjective,
/// a trailing `ý` a hard one.
pub fn guess_type(raw: &str) -> Variant {
    match last_grapheme(raw) {
        Some("í" | "i\u{301}") => Variant::SoftAdjective,
        Some("ý" | "y\u{301}") => Variant::HardAdjective,
        _ => Variant::Word,
    }
}

/// Expand a bare modifier abbreviation.
///
/// Cases use their traditional order (`nom` = 1 ... `ins` = 7).
pub fn shortcut(name: &str) -> Option<Properties> {
    let case = |n: i64| Some(Properties::new().with("case", n));
    match name {
        "nom" => case(1),
        "gen" => case(2),
        "dat" => case(3),
        "acc" => case(4),
        "voc" => case(5),
        "loc" => case(6),
        "ins" => case(7),
        "sg" | "pl" => Some(Properties::new().with("number", name)),
        "m" | "f" | "n" => Some(Properties::new().with("gender", name)),
        "anim" => Some(Properties::new().with("animate", true)),
        "inan" => Some(Properties::new().with("animate", false)),
        _ => None,
    }
}

fn last_grapheme(s: &str) -> Option<&str> {
    s.graphemes(true).next_back()
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Word => "word",
            Variant::HardAdjective => "hard-adjective",
            Variant::SoftAdjective => "soft-adjective",
        }
    }

    /// Nominative masculine animate singular.
    pub fn defaults(self) -> Properties {
        match self {
            Variant::Word => Properties::new(),
            Variant::HardAdjective | Variant::SoftAdjective => Properties::new()
                .with("case", 1)
                .with("number", "sg")
                .with("gender", "m")
                .with("animate", true),
        }
    }

    /// Properties an adjective copies from the word it agrees with.
    pub fn agreement_categories(self) -> &'static [&'static str] {
        match self {
            Variant::Word => &[],
            Variant::HardAdjective | Variant::SoftAdjective => PROPERTIES,
        }
    }

    /// Strip the dictionary-form ending so table endings can be appended.
    pub fn stem(self, text: &str) -> String {
        let endings: &[&str] = match self {
            Variant::Word => &[],
            Variant::HardAdjective => &["ý", "á", "é", "y\u{301}", "a\u{301}", "e\u{301}"],
            Variant::SoftAdjective => &["í", "i\u{301}"],
        };
        match last_grapheme(text) {
            Some(last) if endings.contains(&last) => text[..text.len() - last.len()].to_string(),
            _ => text.to_string(),
        }
    }

    fn declension(self) -> Option<&'static Declension> {
        match self {
            Variant::Word => None,
            Variant::HardAdjective => Some(&HARD),
            Variant::SoftAdjective => Some(&SOFT),
        }
    }

    /// Produce the surface form for fully merged properties.
    pub fn inflect(
        self,
        root: &str,
        text: &str,
        properties: &Properties,
    ) -> Result<String, InflectionError> {
        let Some(declension) = self.declension() else {
            return Ok(text.to_string());
        };
        let grammemes = Grammemes::from_properties(properties)?;
        Ok(format!("{root}{}", declension.ending(&grammemes)))
    }

    /// Every property combination the inflection tables distinguish.
    pub fn paradigm_keys(self) -> Vec<Properties> {
        if self.declension().is_none() {
            return vec![Properties::new()];
        }
        let genders = [
            Properties::new().with("gender", "m").with("animate", true),
            Properties::new().with("gender", "m").with("animate", false),
            Properties::new().with("gender", "f"),
            Properties::new().with("gender", "n"),
        ];
        let mut keys = Vec::with_capacity(genders.len() * SLOTS);
        for gender in &genders {
            for number in ["sg", "pl"] {
                for case in Case::all() {
                    keys.push(
                        gender
                            .clone()
                            .with("number", number)
                            .with("case", i64::from(case.get())),
                    );
                }
            }
        }
        keys
    }
}

/// A grammatical case, 1 (nominative) to 7 (instrumental).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Case(u8);

impl Case {
    pub fn new(n: i64) -> Option<Case> {
        u8::try_from(n)
            .ok()
            .filter(|n| (1..=CASES as u8).contains(n))
            .map(Case)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Case> {
        (1..=CASES as u8).map(Case)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Typed view of the properties a declension table is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammemes {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
    pub animate: bool,
}

impl Grammemes {
    /// Read grammemes from merged properties. Missing ones take the
    /// nominative masculine animate singular defaults.
    pub fn from_properties(properties: &Properties) -> Result<Grammemes, InflectionError> {
        let case = match properties.get("case") {
            None => Case(1),
            Some(value) => value
                .as_integer()
                .and_then(Case::new)
                .ok_or_else(|| invalid("case", value))?,
        };
        let number = match properties.get("number") {
            None => Number::Singular,
            Some(value) => match value.as_text() {
                Some("sg" | "singular") => Number::Singular,
                Some("pl" | "plural") => Number::Plural,
                _ => return Err(invalid("number", value)),
            },
        };
        let gender = match properties.get("gender") {
            None => Gender::Masculine,
            Some(value) => match value.as_text() {
                Some("m" | "masc") => Gender::Masculine,
                Some("f" | "fem") => Gender::Feminine,
                Some("n" | "neut") => Gender::Neuter,
                _ => return Err(invalid("gender", value)),
            },
        };
        let animate = properties
            .get("animate")
            .is_none_or(PropertyValue::is_truthy);
        Ok(Grammemes {
            case,
            number,
            gender,
            animate,
        })
    }
}

fn invalid(property: &str, value: &PropertyValue) -> InflectionError {
    InflectionError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

/// Endings for one gender, indexed by `(case - 1) + (7 if plural)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflectionTable([&'static str; SLOTS]);

impl InflectionTable {
    pub const fn new(endings: [&'static str; SLOTS]) -> Self {
        Self(endings)
    }

    pub fn slot(case: Case, number: Number) -> usize {
        let plural_offset = match number {
            Number::Singular => 0,
            Number::Plural => CASES,
        };
        usize::from(case.get() - 1) + plural_offset
    }

    pub fn ending(&self, case: Case, number: Number) -> &'static str {
        self.0[Self::slot(case, number)]
    }
}

struct Declension {
    masculine_animate: InflectionTable,
    masculine_inanimate: InflectionTable,
    feminine: InflectionTable,
    neuter: InflectionTable,
}

impl Declension {
    fn ending(&self, grammemes: &Grammemes) -> &'static str {
        let table = match (grammemes.gender, grammemes.animate) {
            (Gender::Masculine, true) => &self.masculine_animate,
            (Gender::Masculine, false) => &self.masculine_inanimate,
            (Gender::Feminine, _) => &self.feminine,
            (Gender::Neuter, _) => &self.neuter,
        };
        table.ending(grammemes.case, grammemes.number)
    }
}

static HARD: Declension = Declension {
    masculine_animate: InflectionTable::new([
        "ý", "ého", "ému", "ého", "ý", "ém", "ým", "í", "ých", "ým", "é", "í", "ých", "ými",
    ]),
    masculine_inanimate: InflectionTable::new([
        "ý", "ého", "ému", "ý", "ý", "ém", "ým", "é", "ých", "ým", "é", "é", "ých", "ými",
    ]),
    feminine: InflectionTable::new([
        "á", "é", "é", "ou", "á", "é", "ou", "é", "ých", "ým", "é", "é", "ých", "ými",
    ]),
    neuter: InflectionTable::new([
        "é", "ého", "ému", "é", "é", "ém", "ým", "á", "ých", "ým", "á", "á", "ých", "ými",
    ]),
};

static SOFT: Declension = Declension {
    masculine_animate: InflectionTable::new([
        "í", "ího", "ímu", "ího", "í", "ím", "ím", "í", "ích", "ím", "í", "í", "ích", "ími",
    ]),
    masculine_inanimate: InflectionTable::new([
        "í", "ího", "ímu", "í", "í", "ím", "ím", "í", "ích", "ím", "í", "í", "ích", "ími",
    ]),
    feminine: InflectionTable::new([
        "í", "í", "í", "í", "í", "í", "í", "í", "ích", "ím", "í", "í", "ích", "ími",
    ]),
    neuter: InflectionTable::new([
        "í", "ího", "ímu", "í", "í", "ím", "ím", "í", "ích", "ím", "í", "í", "ích", "ími",
    ]),
};
