//! The per-language formatter.

use crate::grammar::{Language, Variant, Word};
use crate::interpreter::FormatError;
use crate::interpreter::evaluator::render;
use crate::interpreter::resolver::resolve;
use crate::parser::ast::{FormatSpec, Segment};
use crate::parser::parse_format_spec;
use crate::types::Arguments;

/// Formats parsed specs against one language's word system.
///
/// A formatter holds no mutable state; one instance can serve any number of
/// concurrent calls.
///
/// # Example
///
/// ```
/// use concord::{Formatter, Language, args};
///
/// let english = Formatter::new(Language::English);
/// let text = english.format_str("{=a:*0} {0}", &args!["pear"]).unwrap();
/// assert_eq!(text, "a pear");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Formatter {
    language: Language,
}

impl Formatter {
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The word class dispatch picks for `raw`.
    pub fn guess_type(&self, raw: &str) -> Variant {
        self.language.guess_type(raw)
    }

    /// Wrap `raw` into a word of this formatter's language.
    pub fn word(&self, raw: impl Into<String>) -> Word {
        Word::new(self.language, raw)
    }

    /// Format a parsed spec.
    ///
    /// Runs in two passes: every field reference is resolved to a word first,
    /// then each field is inflected and spliced between the literal runs.
    ///
    /// # Errors
    ///
    /// Returns the first resolution or inflection error; no partial output is
    /// produced.
    pub fn format(&self, spec: &FormatSpec, args: &Arguments) -> Result<String, FormatError> {
        let fields = resolve(spec, args, self.language)?;
        let mut output = String::new();
        for segment in &spec.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Field(field) => output.push_str(&render(field, &fields, self.language)?),
            }
        }
        Ok(output)
    }

    /// Parse and format template text in one step.
    pub fn format_str(&self, text: &str, args: &Arguments) -> Result<String, FormatError> {
        let spec = parse_format_spec(text)?;
        self.format(&spec, args)
    }
}
