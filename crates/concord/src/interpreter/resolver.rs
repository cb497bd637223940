//! Field resolution: binding every field reference of a spec to a word.

use std::collections::BTreeMap;

use crate::grammar::{Language, Word};
use crate::interpreter::FormatError;
use crate::interpreter::error::compute_suggestions;
use crate::parser::ast::{FieldRef, FormatSpec};
use crate::types::{Arguments, Value};

/// Words for every field reference of one formatting call.
#[derive(Debug, Default)]
pub struct ResolvedFields {
    words: BTreeMap<FieldRef, Word>,
}

impl ResolvedFields {
    /// The word a reference resolved to.
    pub fn get(&self, reference: &FieldRef) -> Result<&Word, FormatError> {
        self.words
            .get(reference)
            .ok_or_else(|| FormatError::MissingArgument {
                field: reference.to_string(),
                suggestions: Vec::new(),
            })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Resolve every reference in `spec`, including references made from inside
/// modifiers, before anything is inflected.
///
/// Lookup rules:
/// - `Positional(i)`: the i-th positional argument
/// - `Keyword(name)`: the keyword argument `name`
/// - `LiteralDefault(name)`: the keyword argument `name` if supplied, else
///   the literal text `name`
///
/// # Errors
///
/// Returns [`FormatError::MissingArgument`] for the first reference that
/// cannot be bound.
pub fn resolve(
    spec: &FormatSpec,
    args: &Arguments,
    language: Language,
) -> Result<ResolvedFields, FormatError> {
    let mut resolved = ResolvedFields::default();
    for reference in spec.references() {
        if resolved.words.contains_key(reference) {
            continue;
        }
        let word = resolve_value(reference, args)?.to_word(language);
        resolved.words.insert(reference.clone(), word);
    }
    Ok(resolved)
}

fn resolve_value(reference: &FieldRef, args: &Arguments) -> Result<Value, FormatError> {
    match reference {
        FieldRef::Positional(index) => {
            args.positional(*index)
                .cloned()
                .ok_or_else(|| FormatError::MissingArgument {
                    field: reference.to_string(),
                    suggestions: Vec::new(),
                })
        }
        FieldRef::Keyword(name) => {
            args.keyword(name)
                .cloned()
                .ok_or_else(|| FormatError::MissingArgument {
                    field: reference.to_string(),
                    suggestions: compute_suggestions(name, &args.keyword_names()),
                })
        }
        FieldRef::LiteralDefault(literal) => Ok(args
            .keyword(literal)
            .cloned()
            .unwrap_or_else(|| Value::from(literal.as_str()))),
    }
}
