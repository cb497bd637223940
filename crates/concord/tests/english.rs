//! Tests for English indefinite article agreement.

use concord::grammar::english;
use concord::{Formatter, Language, Properties, Template, Variant, Word, args};

fn english() -> Formatter {
    Formatter::new(Language::English)
}

// =============================================================================
// Article agreement
// =============================================================================

#[test]
fn article_agrees_with_positional_noun() {
    assert_eq!(english().format_str("{1:*0} {0}", &args!["apple", "a"]).unwrap(), "an apple");
    assert_eq!(english().format_str("{1:*0} {0}", &args!["pear", "a"]).unwrap(), "a pear");
}

#[test]
fn article_written_as_an_still_agrees() {
    assert_eq!(english().format_str("{1:*0} {0}", &args!["pear", "an"]).unwrap(), "a pear");
}

#[test]
fn inline_literal_article() {
    let template = Template::new(Language::English, "I ate {=a:*0} {0}.");
    assert_eq!(template.format(&args!["orange"]).unwrap(), "I ate an orange.");
    assert_eq!(template.format(&args!["banana"]).unwrap(), "I ate a banana.");
}

#[test]
fn capitalised_article_keeps_its_case() {
    let template = Template::new(Language::English, "{=A:*0} {0} fell.");
    assert_eq!(template.format(&args!["Egg"]).unwrap(), "An Egg fell.");
    assert_eq!(template.format(&args!["plum"]).unwrap(), "A plum fell.");
}

#[test]
fn keyword_fields_agree() {
    let template = Template::new(Language::English, "{article:*noun} {noun}");
    let args = args![; "article" => "a", "noun" => "umbrella"];
    assert_eq!(template.format(&args).unwrap(), "an umbrella");
}

#[test]
fn literal_default_can_be_overridden_by_keyword() {
    let template = Template::new(Language::English, "{=a:*0} {0}");
    let args = args!["idea"; "a" => "one"];
    assert_eq!(template.format(&args).unwrap(), "one idea");
}

#[test]
fn agreement_with_phrase_uses_its_first_word() {
    let template = Template::new(Language::English, "{=a:*0} {0}");
    assert_eq!(template.format(&args!["old apple"]).unwrap(), "an old apple");
    assert_eq!(template.format(&args!["red apple"]).unwrap(), "a red apple");
}

#[test]
fn explicit_property_beats_agreement() {
    let template = Template::new(Language::English, "{=a:*0:begins_with_vowel=no} {0}");
    assert_eq!(template.format(&args!["unicorn"]).unwrap(), "a unicorn");
}

#[test]
fn property_copied_from_another_field() {
    let template = Template::new(Language::English, "{=a:begins_with_vowel=*0} {0}");
    assert_eq!(template.format(&args!["ox"]).unwrap(), "an ox");
}

#[test]
fn article_without_agreement_is_unchanged() {
    assert_eq!(english().format_str("{0} dog", &args!["an"]).unwrap(), "an dog");
}

#[test]
fn numbers_are_plain_words() {
    let text = english().format_str("{=a:*0} {0}", &args![8]).unwrap();
    assert_eq!(text, "a 8");
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn keyword_article_before_keyword_noun() {
    let args = args![; "a" => "a", "w" => "apple"];
    assert_eq!(english().format_str("{a:*w} {w}", &args).unwrap(), "an apple");
}

#[test]
fn keyword_article_before_positional_noun() {
    let args = args!["apple"; "a" => "a"];
    assert_eq!(english().format_str("{a:*0} {0}", &args).unwrap(), "an apple");
}

#[test]
fn literal_article_before_vowel() {
    assert_eq!(english().format_str("{=a:*0} {0}", &args!["apple"]).unwrap(), "an apple");
}

#[test]
fn literal_article_before_consonant() {
    assert_eq!(english().format_str("{=a:*0} {0}", &args!["pear"]).unwrap(), "a pear");
}

// =============================================================================
// Word classes
// =============================================================================

#[test]
fn dictionary_dispatch() {
    assert_eq!(english::lookup("a"), Some(english::Variant::IndefiniteArticle));
    assert_eq!(english::lookup("an"), Some(english::Variant::IndefiniteArticle));
    assert_eq!(english::lookup("the"), None);
    assert_eq!(
        english().guess_type("an"),
        Variant::English(english::Variant::IndefiniteArticle)
    );
    assert_eq!(english().guess_type("apple"), Variant::English(english::Variant::Word));
}

#[test]
fn vowel_heuristic_looks_at_first_letter_only() {
    assert!(english::begins_with_vowel("apple"));
    assert!(english::begins_with_vowel("Umbrella"));
    assert!(!english::begins_with_vowel("hour"));
    assert!(!english::begins_with_vowel(""));
}

#[test]
fn article_inflects_directly() {
    let article = Word::new(Language::English, "a");
    let vowel = Properties::new().with("begins_with_vowel", true);
    assert_eq!(article.inflect(&vowel).unwrap(), "an");
    assert_eq!(article.inflect(&Properties::new()).unwrap(), "a");
}

#[test]
fn article_paradigm() {
    let article = Word::new(Language::English, "an");
    let forms: Vec<String> = article.paradigm().unwrap().into_iter().map(|(_, form)| form).collect();
    assert_eq!(forms, vec!["a", "an"]);
}
