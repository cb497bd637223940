//! Public AST types for parsed format specs.
//!
//! These types are public so tooling (linters, the CLI) can inspect a template
//! without formatting it.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::types::PropertyValue;

/// A parsed format spec: literal runs interleaved with placeholder fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub segments: Vec<Segment>,
}

impl FormatSpec {
    /// Iterates over the placeholder fields in source order.
    pub fn fields(&self) -> impl Iterator<Item = &FormatField> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field),
            Segment::Literal(_) => None,
        })
    }

    /// Every field reference in the template, including references made
    /// from inside modifiers, in source order (duplicates included).
    pub fn references(&self) -> Vec<&FieldRef> {
        let mut references = Vec::new();
        for field in self.fields() {
            references.push(&field.reference);
            for modifier in &field.modifiers {
                modifier.collect_references(&mut references);
            }
        }
        references
    }

    /// Returns true if the template contains no placeholders.
    pub fn is_literal(&self) -> bool {
        self.fields().next().is_none()
    }
}

/// A segment within a format spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with `{{` and `}}` escapes already collapsed.
    Literal(String),
    /// A placeholder: `{reference:modifier:...}`
    Field(FormatField),
}

/// A parsed placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatField {
    pub reference: FieldRef,
    /// Modifier parts in source order (`{0:*1:case=2}` has two).
    pub modifiers: Vec<Modifier>,
}

/// What a placeholder (or a modifier) refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldRef {
    /// `{0}`
    Positional(usize),
    /// `{name}`
    Keyword(String),
    /// `{=name}`: the keyword argument `name` if supplied, otherwise the
    /// literal text `name`.
    LiteralDefault(String),
}

impl Display for FieldRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FieldRef::Positional(index) => write!(f, "{index}"),
            FieldRef::Keyword(name) => write!(f, "{name}"),
            FieldRef::LiteralDefault(literal) => write!(f, "={literal}"),
        }
    }
}

/// One `:`-separated modifier part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// `*ref`: agree with another field's word.
    AgreementRef(FieldRef),
    /// `case=2,number=pl`
    PropertyList(Vec<PropertyItem>),
}

impl Modifier {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a FieldRef>) {
        match self {
            Modifier::AgreementRef(reference) => out.push(reference),
            Modifier::PropertyList(items) => {
                for item in items {
                    match item {
                        PropertyItem::Copy { source, .. } => out.push(source),
                        PropertyItem::Agree(reference) => out.push(reference),
                        PropertyItem::Assign { .. } | PropertyItem::Shortcut(_) => {}
                    }
                }
            }
        }
    }
}

/// An entry in a property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyItem {
    /// `name=value` or `a=b=value`.
    Assign {
        names: Vec<String>,
        value: PropertyValue,
    },
    /// `name=*ref`: copy `name` from the referenced field's word.
    Copy { names: Vec<String>, source: FieldRef },
    /// `*ref` inside a list of other items.
    Agree(FieldRef),
    /// A bare language-specific abbreviation such as `gen` or `pl`.
    Shortcut(String),
}
