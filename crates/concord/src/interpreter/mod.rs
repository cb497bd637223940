//! Formatting engine.
//!
//! Takes parsed format specs and produces strings: resolves every field to a
//! word, merges modifier properties with agreement and class defaults, and
//! inflects.

mod error;
mod evaluator;
mod formatter;
mod lint;
mod resolver;

pub use error::{FormatError, compute_suggestions};
pub use evaluator::{merge_modifiers, render};
pub use formatter::Formatter;
pub use lint::{LintWarning, lint};
pub use resolver::{ResolvedFields, resolve};
