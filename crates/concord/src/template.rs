//! The template façade: format-spec text bound to a language.

use std::fmt::{Display, Formatter as FmtFormatter, Result as FmtResult};
use std::ops::Deref;
use std::sync::OnceLock;

use bon::Builder;

use crate::grammar::Language;
use crate::interpreter::{FormatError, Formatter, LintWarning, lint};
use crate::parser::{FormatSpec, ParseError, parse_format_spec};
use crate::types::Arguments;

/// Format-spec text bound to one language's word system.
///
/// A template behaves like its text until formatted: it derefs to `str` and
/// displays verbatim. The text is parsed once, on first use, and the parsed
/// spec is shared by every later call, including calls from other threads.
///
/// # Example
///
/// ```
/// use concord::{Language, Template, args};
///
/// let template = Template::new(Language::Czech, "{0:case=2}");
/// assert_eq!(template.format(&args!["mladý"]).unwrap(), "mladého");
/// assert_eq!(&*template, "{0:case=2}");
///
/// let built = Template::builder()
///     .language(Language::English)
///     .text("{a:*w} {w}")
///     .build();
/// assert_eq!(built.format(&args![; "a" => "a", "w" => "apple"]).unwrap(), "an apple");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Template {
    /// Language whose word system inflects the fields.
    #[builder(default)]
    language: Language,

    /// The format-spec text.
    text: String,

    #[builder(skip)]
    compiled: OnceLock<Result<FormatSpec, ParseError>>,
}

impl Template {
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        Template::builder().language(language).text(text).build()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.language)
    }

    /// The parsed spec, parsing on first call.
    ///
    /// # Errors
    ///
    /// Returns the syntax error if the text is not a valid format spec. The
    /// error is cached like a successful parse.
    pub fn compile(&self) -> Result<&FormatSpec, ParseError> {
        self.compiled
            .get_or_init(|| parse_format_spec(&self.text))
            .as_ref()
            .map_err(ParseError::clone)
    }

    /// Format with positional and keyword arguments.
    pub fn format(&self, args: &Arguments) -> Result<String, FormatError> {
        let spec = self.compile()?;
        self.formatter().format(spec, args)
    }

    /// Properties and shortcuts formatting would ignore.
    pub fn lint(&self) -> Result<Vec<LintWarning>, ParseError> {
        Ok(lint(self.compile()?, self.language))
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && self.text == other.text
    }
}

impl Eq for Template {}

impl Deref for Template {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        f.write_str(&self.text)
    }
}
