//! Tests for formatting errors and error message formatting.

use concord::{FormatError, Formatter, Language, ParseError, Template, args, compute_suggestions};

#[test]
fn compute_suggestions_finds_similar_keys() {
    let available = vec!["noun".to_string(), "name".to_string(), "count".to_string()];

    // "nmae" is two edits from "name"; short keys would only allow one
    let suggestions = compute_suggestions("nmae", &available);
    assert_eq!(suggestions, vec!["name"]);

    // "nou" is one edit from "noun"
    let suggestions = compute_suggestions("nou", &available);
    assert_eq!(suggestions, vec!["noun"]);

    let suggestions = compute_suggestions("xyz", &available);
    assert!(suggestions.is_empty());
}

#[test]
fn compute_suggestions_limits_to_three_closest_first() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    let suggestions = compute_suggestions("item", &available);
    assert_eq!(suggestions.len(), 3);

    let available = vec!["cases".to_string(), "case".to_string()];
    assert_eq!(compute_suggestions("cas", &available), vec!["case"]);
}

// =============================================================================
// Missing arguments
// =============================================================================

#[test]
fn missing_positional_argument() {
    let err = Formatter::new(Language::English)
        .format_str("{0} and {1}", &args!["apple"])
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingArgument {
            field: "1".into(),
            suggestions: vec![],
        }
    );
    assert_eq!(err.to_string(), "missing argument for field '1'");
}

#[test]
fn missing_keyword_argument_suggests_close_names() {
    let template = Template::new(Language::English, "Hello, {nmae}!");
    let err = template.format(&args![; "name" => "Alice"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing argument for field 'nmae'; did you mean: name?"
    );
}

#[test]
fn missing_reference_inside_modifier() {
    let template = Template::new(Language::Czech, "{0:*2}");
    let err = template.format(&args!["mladý"]).unwrap_err();
    assert!(matches!(err, FormatError::MissingArgument { ref field, .. } if field == "2"));
}

#[test]
fn missing_copy_source() {
    let template = Template::new(Language::Czech, "{0:case=*noun}");
    let err = template.format(&args!["mladý"]).unwrap_err();
    assert!(matches!(err, FormatError::MissingArgument { ref field, .. } if field == "noun"));
}

#[test]
fn extra_arguments_are_ignored() {
    let template = Template::new(Language::English, "{0}");
    let args = args!["one", "two"; "unused" => 3];
    assert_eq!(template.format(&args).unwrap(), "one");
}

// =============================================================================
// Syntax errors through the façade
// =============================================================================

#[test]
fn syntax_error_is_reported_when_formatting() {
    let template = Template::new(Language::English, "{0");
    let err = template.format(&args!["x"]).unwrap_err();
    assert!(matches!(err, FormatError::Syntax(ParseError::Syntax { .. })));
}

#[test]
fn syntax_error_is_cached() {
    let template = Template::new(Language::English, "oops }");
    let first = template.compile().unwrap_err();
    let second = template.compile().unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.offset(), 5);
}

#[test]
fn syntax_error_displays_transparently() {
    let err = Formatter::new(Language::Neutral)
        .format_str("}", &args![])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at 1:1: single '}' encountered in format string"
    );
}
