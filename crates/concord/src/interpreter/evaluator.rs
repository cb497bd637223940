//! Agreement and inflection engine.
//!
//! Turns a resolved field plus its modifiers into a surface string. Property
//! precedence, highest first:
//! 1. explicit properties (`case=2`, shortcuts, `case=*ref`)
//! 2. properties derived by agreement (`*ref`)
//! 3. the word class defaults
//!
//! Later modifier parts override earlier ones within the same layer.

use log::debug;

use crate::grammar::{InflectionError, Language, Word};
use crate::interpreter::FormatError;
use crate::interpreter::resolver::ResolvedFields;
use crate::parser::ast::{FormatField, Modifier, PropertyItem};
use crate::types::Properties;

/// Render one field to its final surface string.
///
/// # Errors
///
/// Returns an error if a referenced field was not resolved or a recognised
/// property carries an unusable value.
pub fn render(
    field: &FormatField,
    fields: &ResolvedFields,
    language: Language,
) -> Result<String, FormatError> {
    let word = fields.get(&field.reference)?;
    let overrides = merge_modifiers(word, &field.modifiers, fields, language)?;
    word.inflect(&overrides).map_err(|e| match e {
        InflectionError::InvalidValue { property, value } => FormatError::InvalidProperty {
            field: field.reference.to_string(),
            property,
            value,
        },
    })
}

/// Merge the agreement and explicit layers of `modifiers` for `word`.
///
/// Class defaults are not included; each lexeme of the word lays the result
/// over its own defaults when it inflects.
pub fn merge_modifiers(
    word: &Word,
    modifiers: &[Modifier],
    fields: &ResolvedFields,
    language: Language,
) -> Result<Properties, FormatError> {
    let mut agreed = Properties::new();
    let mut explicit = Properties::new();

    for modifier in modifiers {
        match modifier {
            Modifier::AgreementRef(reference) => {
                agree(word, fields.get(reference)?, &mut agreed);
            }
            Modifier::PropertyList(items) => {
                for item in items {
                    apply_item(word, item, fields, language, &mut agreed, &mut explicit)?;
                }
            }
        }
    }

    for name in explicit.names() {
        if !language.properties().iter().any(|known| *known == name) {
            debug!(
                "ignoring unknown {language} property '{name}' for '{}'",
                word.text()
            );
        }
    }

    agreed.merge(&explicit);
    Ok(agreed)
}

fn apply_item(
    word: &Word,
    item: &PropertyItem,
    fields: &ResolvedFields,
    language: Language,
    agreed: &mut Properties,
    explicit: &mut Properties,
) -> Result<(), FormatError> {
    match item {
        PropertyItem::Assign { names, value } => {
            for name in names {
                explicit.insert(name.as_str(), value.clone());
            }
        }
        PropertyItem::Copy { names, source } => {
            let source_word = fields.get(source)?;
            for name in names {
                match source_word.property(name) {
                    Some(value) => explicit.insert(name.as_str(), value),
                    None => debug!("field '{source}' has no property '{name}' to copy"),
                }
            }
        }
        PropertyItem::Agree(reference) => agree(word, fields.get(reference)?, agreed),
        PropertyItem::Shortcut(name) => match language.shortcut(name) {
            Some(properties) => explicit.merge(&properties),
            None => debug!("ignoring unknown {language} shortcut '{name}'"),
        },
    }
    Ok(())
}

/// Copy the properties `word` agrees on from `source`.
fn agree(word: &Word, source: &Word, into: &mut Properties) {
    for category in word.agreement_categories() {
        if let Some(value) = source.property(category) {
            into.insert(category, value);
        }
    }
}
