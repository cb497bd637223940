//! Hand-off from a translation catalog.
//!
//! Catalog lookup happens elsewhere. A translated string that starts with
//! [`TEMPLATE_SENTINEL`] is a template for this engine; anything else is
//! plain text and must be used verbatim.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::grammar::Language;
use crate::interpreter::FormatError;
use crate::template::Template;
use crate::types::Arguments;

/// Marks a catalog string as a template.
pub const TEMPLATE_SENTINEL: char = '@';

/// A translated catalog string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translated {
    /// Plain text, never interpreted.
    Verbatim(String),
    /// Text after the sentinel, bound to the catalog's language.
    Template(Template),
}

impl Translated {
    /// Classify a catalog string for `language_code` (`cs`, `en_US`, ...).
    ///
    /// ```
    /// use concord::{Translated, args};
    ///
    /// let greeting = Translated::from_catalog("@{=a:*0} {0}", "en_US");
    /// assert_eq!(greeting.format(&args!["apple"]).unwrap(), "an apple");
    ///
    /// let plain = Translated::from_catalog("{not a template}", "en");
    /// assert_eq!(plain.format(&args![]).unwrap(), "{not a template}");
    /// ```
    pub fn from_catalog(text: impl Into<String>, language_code: &str) -> Self {
        let text = text.into();
        match text.strip_prefix(TEMPLATE_SENTINEL) {
            Some(body) => {
                Translated::Template(Template::new(Language::from_code(language_code), body))
            }
            None => Translated::Verbatim(text),
        }
    }

    /// The text without the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Translated::Verbatim(text) => text,
            Translated::Template(template) => template.text(),
        }
    }

    /// Format a template; verbatim text is returned unchanged.
    pub fn format(&self, args: &Arguments) -> Result<String, FormatError> {
        match self {
            Translated::Verbatim(text) => Ok(text.clone()),
            Translated::Template(template) => template.format(args),
        }
    }
}

impl Display for Translated {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
