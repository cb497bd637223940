//! Static lint rules for format specs.
//!
//! Formatting ignores property names and shortcuts a language does not know.
//! That keeps templates working across word systems but hides typos such as
//! `{0:gendr=f}`, so this pass reports them without needing any arguments.

use thiserror::Error;

use crate::grammar::Language;
use crate::interpreter::error::compute_suggestions;
use crate::parser::ast::{FieldRef, FormatSpec, Modifier, PropertyItem};

/// Something in a template that formatting will silently ignore.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    #[error("field '{field}': unknown {language} property '{name}'{}", hint(suggestions))]
    UnknownProperty {
        field: String,
        language: Language,
        name: String,
        suggestions: Vec<String>,
    },

    #[error("field '{field}': unknown {language} shortcut '{name}'{}", hint(suggestions))]
    UnknownShortcut {
        field: String,
        language: Language,
        name: String,
        suggestions: Vec<String>,
    },
}

impl LintWarning {
    /// The field the warning is about.
    pub fn field(&self) -> &str {
        match self {
            LintWarning::UnknownProperty { field, .. } | LintWarning::UnknownShortcut { field, .. } => {
                field
            }
        }
    }
}

fn hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// Runs the lint rules over a parsed spec for `language`.
pub fn lint(spec: &FormatSpec, language: Language) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for field in spec.fields() {
        for modifier in &field.modifiers {
            if let Modifier::PropertyList(items) = modifier {
                for item in items {
                    lint_item(&field.reference, item, language, &mut warnings);
                }
            }
        }
    }
    warnings
}

fn lint_item(
    reference: &FieldRef,
    item: &PropertyItem,
    language: Language,
    warnings: &mut Vec<LintWarning>,
) {
    match item {
        PropertyItem::Assign { names, .. } | PropertyItem::Copy { names, .. } => {
            for name in names {
                if !language.properties().iter().any(|known| known == name) {
                    warnings.push(LintWarning::UnknownProperty {
                        field: reference.to_string(),
                        language,
                        name: name.clone(),
                        suggestions: suggest(name, language.properties()),
                    });
                }
            }
        }
        PropertyItem::Shortcut(name) => {
            if language.shortcut(name).is_none() {
                warnings.push(LintWarning::UnknownShortcut {
                    field: reference.to_string(),
                    language,
                    name: name.clone(),
                    suggestions: suggest(name, language.shortcut_names()),
                });
            }
        }
        PropertyItem::Agree(_) => {}
    }
}

fn suggest(name: &str, known: &[&str]) -> Vec<String> {
    let available: Vec<String> = known.iter().map(ToString::to_string).collect();
    compute_suggestions(name, &available)
}
