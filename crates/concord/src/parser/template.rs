//! Format-spec parser using winnow.
//!
//! Parses template text into an AST. Handles:
//! - Literal text runs
//! - Placeholders `{ref}` with positional, keyword and `=literal` references
//! - Chained modifiers: `*ref` agreement and `name=value` property lists
//! - Escape sequences: `{{` and `}}`

use log::trace;
use winnow::combinator::{alt, cut_err, opt, preceded, repeat, separated, terminated};
use winnow::error::{ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{FieldRef, FormatField, FormatSpec, Modifier, PropertyItem, Segment};
use super::error::{MisplacedReference, ParseError};
use crate::types::PropertyValue;

/// Parse template text into a [`FormatSpec`].
///
/// # Example
///
/// ```
/// use concord::parser::{FieldRef, Segment, parse_format_spec};
///
/// let spec = parse_format_spec("{=a:*0} {0}").unwrap();
/// assert_eq!(spec.segments.len(), 3);
/// assert_eq!(spec.segments[1], Segment::Literal(" ".into()));
/// assert_eq!(spec.references()[0], &FieldRef::LiteralDefault("a".into()));
/// ```
pub fn parse_format_spec(input: &str) -> Result<FormatSpec, ParseError> {
    let mut remaining = input;
    match format_spec(&mut remaining) {
        Ok(spec) if remaining.is_empty() => {
            trace!(
                "parsed format spec with {} segment(s): {input:?}",
                spec.segments.len()
            );
            Ok(spec)
        }
        Ok(_) => Err(syntax_error(input, remaining, unexpected_message(remaining))),
        Err(e) => {
            let message = match e {
                ErrMode::Backtrack(context) | ErrMode::Cut(context) => {
                    let text = context.to_string();
                    if text.trim().is_empty() {
                        unexpected_message(remaining)
                    } else {
                        text.trim().replace('\n', "; ")
                    }
                }
                ErrMode::Incomplete(_) => "unexpected end of input".to_string(),
            };
            Err(syntax_error(input, remaining, message))
        }
    }
}

fn syntax_error(original: &str, remaining: &str, message: String) -> ParseError {
    let (line, column, offset) = calculate_position(original, remaining);
    ParseError::Syntax {
        line,
        column,
        offset,
        message,
    }
}

fn unexpected_message(remaining: &str) -> String {
    match remaining.chars().next() {
        Some('}') => "single '}' encountered in format string".to_string(),
        Some('{') => "unmatched '{' in format string".to_string(),
        Some(c) => format!("unexpected character: '{c}'"),
        None => "unexpected end of input".to_string(),
    }
}

/// Calculate line, character column and byte offset of `remaining` in `original`.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize, usize) {
    let offset = original.len() - remaining.len();
    let consumed = &original[..offset];
    let line = consumed.matches('\n').count() + 1;
    let line_start = consumed.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed[line_start..].chars().count() + 1;
    (line, column, offset)
}

fn format_spec(input: &mut &str) -> ModalResult<FormatSpec> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(FormatSpec {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, field, literal_char)).parse_next(input)
}

/// `{{` -> `{`, `}}` -> `}`
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Once `{` is seen the placeholder must be well formed.
fn field(input: &mut &str) -> ModalResult<Segment> {
    preceded(
        '{',
        cut_err(terminated(
            field_body,
            '}'.context(StrContext::Expected(StrContextValue::CharLiteral('}'))),
        )),
    )
    .map(Segment::Field)
    .parse_next(input)
}

fn field_body(input: &mut &str) -> ModalResult<FormatField> {
    let reference = field_ref.parse_next(input)?;
    // An empty part (`{0:}`) is allowed and means no modifier.
    let parts: Vec<Option<Modifier>> =
        repeat(0.., preceded(':', cut_err(opt(modifier)))).parse_next(input)?;
    Ok(FormatField {
        reference,
        modifiers: parts.into_iter().flatten().collect(),
    })
}

fn field_ref(input: &mut &str) -> ModalResult<FieldRef> {
    alt((
        preceded('=', take_while(1.., is_literal_char))
            .map(|literal: &str| FieldRef::LiteralDefault(literal.to_string())),
        take_while(1.., |c: char| c.is_ascii_digit())
            .try_map(|digits: &str| digits.parse::<usize>())
            .map(FieldRef::Positional),
        identifier.map(|name: &str| FieldRef::Keyword(name.to_string())),
    ))
    .context(StrContext::Label("field reference"))
    .parse_next(input)
}

/// A modifier part: a comma-separated list of property items. A list holding
/// a single `*ref` is the agreement shorthand.
fn modifier(input: &mut &str) -> ModalResult<Modifier> {
    let items: Vec<PropertyItem> = separated(1.., property_item, ',')
        .context(StrContext::Label("modifier"))
        .parse_next(input)?;
    Ok(match <[PropertyItem; 1]>::try_from(items) {
        Ok([PropertyItem::Agree(reference)]) => Modifier::AgreementRef(reference),
        Ok([item]) => Modifier::PropertyList(vec![item]),
        Err(items) => Modifier::PropertyList(items),
    })
}

fn property_item(input: &mut &str) -> ModalResult<PropertyItem> {
    alt((
        preceded('*', cut_err(field_ref)).map(PropertyItem::Agree),
        assignment,
    ))
    .parse_next(input)
}

/// Right-hand side of an `=` inside a property item.
enum Operand {
    Token(String),
    Reference(FieldRef),
}

fn operand(input: &mut &str) -> ModalResult<Operand> {
    alt((
        preceded('*', cut_err(field_ref)).map(Operand::Reference),
        take_while(1.., is_literal_char)
            .map(|token: &str| Operand::Token(token.trim().to_string())),
    ))
    .context(StrContext::Label("property value"))
    .parse_next(input)
}

/// `shortcut`, `name=value`, `a=b=value` or `name=*ref`.
fn assignment(input: &mut &str) -> ModalResult<PropertyItem> {
    (identifier, repeat(0.., preceded('=', cut_err(operand))))
        .try_map(|(name, operands): (&str, Vec<Operand>)| build_assignment(name, operands))
        .context(StrContext::Label("property assignment"))
        .parse_next(input)
}

fn build_assignment(
    name: &str,
    mut operands: Vec<Operand>,
) -> Result<PropertyItem, MisplacedReference> {
    let Some(last) = operands.pop() else {
        return Ok(PropertyItem::Shortcut(name.to_string()));
    };

    let mut names = vec![name.to_string()];
    for operand in operands {
        match operand {
            Operand::Token(token) if is_identifier(&token) => names.push(token),
            Operand::Token(_) | Operand::Reference(_) => return Err(MisplacedReference),
        }
    }

    Ok(match last {
        Operand::Token(token) => PropertyItem::Assign {
            names,
            value: PropertyValue::parse(&token),
        },
        Operand::Reference(source) => PropertyItem::Copy { names, source },
    })
}

fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .parse_next(input)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_cont)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_cont(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters allowed in an inline `=literal` or a property value (spaces
/// included).
fn is_literal_char(c: char) -> bool {
    !matches!(c, '{' | '}' | ':' | ',' | '=' | '*')
}
