//! Linguistic templates with grammatical agreement.
//!
//! A template is format-spec text (`"{=a:*0} {0}"`, `"{0:case=2}"`) bound to a
//! language. Formatting resolves every field to a [`Word`], merges the
//! properties its modifiers request with those agreed from other fields and
//! the word class defaults, and inflects.

pub mod grammar;
pub mod interpreter;
pub mod parser;
pub mod types;

mod template;
mod translation;

pub use grammar::{InflectionError, Language, Lexeme, UnknownLanguage, Variant, Word};
pub use interpreter::{FormatError, Formatter, LintWarning, compute_suggestions, lint};
pub use parser::{FormatSpec, ParseError, parse_format_spec};
pub use template::Template;
pub use translation::{TEMPLATE_SENTINEL, Translated};
pub use types::{Arguments, Properties, PropertyValue, Value};

/// Creates [`Arguments`] from positional values and `name => value` pairs.
///
/// Positional values come first; keyword pairs follow a `;`. Values are
/// converted via `Into<Value>`, so integers, strings and [`Word`]s can be
/// passed directly.
///
/// # Example
///
/// ```
/// use concord::{Value, args};
///
/// let a = args!["apple", 3; "name" => "Alice"];
/// assert_eq!(a.positional_len(), 2);
/// assert_eq!(a.positional(1).and_then(Value::as_number), Some(3));
/// assert_eq!(a.keyword("name").and_then(Value::as_string), Some("Alice"));
///
/// let only_keywords = args![; "w" => "apple"];
/// assert_eq!(only_keywords.positional_len(), 0);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::args![$($value),+ ;]
    };
    ($($value:expr),* ; $($key:expr => $keyword:expr),* $(,)?) => {
        {
            let mut arguments = $crate::Arguments::new();
            $(
                arguments.push(::std::convert::Into::<$crate::Value>::into($value));
            )*
            $(
                arguments.insert($key, ::std::convert::Into::<$crate::Value>::into($keyword));
            )*
            arguments
        }
    };
}
