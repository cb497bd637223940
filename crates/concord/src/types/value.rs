use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::grammar::{Language, Word};

/// A runtime value that can be passed as a template argument.
///
/// Text and numbers are turned into a [`Word`] by the formatter's language
/// dispatch. A pre-built [`Word`] bypasses dispatch, which lets callers pin a
/// word class the spelling heuristics would not pick.
///
/// # Example
///
/// ```
/// use concord::{Language, Value, Word};
///
/// // Numbers become Value::Number
/// let count: Value = 42.into();
///
/// // Strings become Value::String
/// let name: Value = "apple".into();
///
/// // Words keep their word class
/// let word: Value = Word::new(Language::Czech, "mladý").into();
/// assert_eq!(word.to_string(), "mladý");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A word whose class is already known.
    Word(Word),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a word, if it is one.
    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Value::Word(w) => Some(w),
            _ => None,
        }
    }

    /// Turn this value into a word of `language`.
    ///
    /// Words already carry a class and are returned unchanged.
    pub fn to_word(&self, language: Language) -> Word {
        match self {
            Value::Word(word) => word.clone(),
            Value::String(s) => Word::new(language, s.as_str()),
            Value::Number(_) | Value::Float(_) => Word::new(language, self.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Word(w) => write!(f, "{w}"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Values above `i64::MAX` are kept as their decimal text.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Value::String(n.to_string()), Value::Number)
    }
}

/// Values above `i64::MAX` are kept as their decimal text.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Value::String(n.to_string()), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Word> for Value {
    fn from(w: Word) -> Self {
        Value::Word(w)
    }
}
