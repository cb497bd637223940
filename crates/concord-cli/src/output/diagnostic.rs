//! Miette diagnostic wrapper for template syntax errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use concord::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for template syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(concord::syntax))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic for a template that starts `line_start` bytes into
    /// `content`.
    pub fn from_parse_error(
        path: &Path,
        content: &str,
        line_start: usize,
        err: &ParseError,
    ) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = (line_start + err.offset()).min(content.len());
        let message = err.message().to_string();
        let help = (message.contains("'{'") || message.contains("'}'"))
            .then(|| "write '{{' or '}}' for a literal brace".to_string());

        TemplateDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}
