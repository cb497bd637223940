use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The value of one grammatical property (`case=2`, `animate=no`, ...).
///
/// Values written in a template are classified when parsed: `true`, `false`,
/// `yes` and `no` become [`PropertyValue::Bool`], decimal digits become
/// [`PropertyValue::Integer`], anything else stays [`PropertyValue::Text`].
///
/// ```
/// use concord::PropertyValue;
///
/// assert_eq!(PropertyValue::parse("2"), PropertyValue::Integer(2));
/// assert_eq!(PropertyValue::parse("no"), PropertyValue::Bool(false));
/// assert_eq!(PropertyValue::parse("pl"), PropertyValue::Text("pl".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl PropertyValue {
    /// Classify a raw value token.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" | "yes" => PropertyValue::Bool(true),
            "false" | "no" => PropertyValue::Bool(false),
            _ if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => raw
                .parse()
                .map_or_else(|_| PropertyValue::Text(raw.to_string()), PropertyValue::Integer),
            _ => PropertyValue::Text(raw.to_string()),
        }
    }

    /// Truthiness used for flags such as `animate`.
    ///
    /// Accepts `1`, `t`, `true`, `y`, `yes` and `True`; every other value is
    /// false.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Bool(b) => *b,
            PropertyValue::Integer(n) => *n == 1,
            PropertyValue::Text(s) => matches!(s.as_str(), "1" | "t" | "true" | "y" | "yes" | "True"),
        }
    }

    /// Integer view: integers as-is, text if it parses as one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(n) => Some(*n),
            PropertyValue::Text(s) => s.parse().ok(),
            PropertyValue::Bool(_) => None,
        }
    }

    /// Text view, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Bool(_) | PropertyValue::Integer(_) => None,
        }
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Integer(n) => write!(f, "{n}"),
            PropertyValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Integer(i64::from(n))
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Integer(n)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

/// A set of named grammatical properties.
///
/// Properties merge functionally: [`Properties::merge`] overlays another set,
/// with the overlay winning on conflicts. Iteration is in name order.
///
/// ```
/// use concord::Properties;
///
/// let defaults = Properties::new().with("case", 1).with("number", "sg");
/// let merged = defaults.overlaid(&Properties::new().with("case", 2));
/// assert_eq!(merged.get("case"), Some(&2.into()));
/// assert_eq!(merged.get("number"), Some(&"sg".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a property, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Overlay `other` onto this set; values in `other` win.
    pub fn merge(&mut self, other: &Properties) {
        for (name, value) in other {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Functional form of [`Properties::merge`].
    pub fn overlaid(mut self, other: &Properties) -> Properties {
        self.merge(other);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, PropertyValue> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a PropertyValue);
    type IntoIter = Iter<'a, String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Properties(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Renders as `case=2, number=pl`.
impl Display for Properties {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (name, value) in self {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}
