//! Tests for Czech adjective declension.

use concord::grammar::czech::{self, Case, InflectionTable, Number};
use concord::{
    FormatError, Formatter, InflectionError, Language, Properties, Template, Variant, Word, args,
};
use insta::assert_snapshot;

fn czech() -> Formatter {
    Formatter::new(Language::Czech)
}

fn format(text: &str, word: &str) -> String {
    czech().format_str(text, &args![word]).unwrap()
}

// =============================================================================
// Declension through templates
// =============================================================================

#[test]
fn hard_adjective_dative() {
    assert_eq!(format("{0:case=3}", "mladý"), "mladému");
}

#[test]
fn phrase_declines_every_adjective() {
    assert_eq!(format("{0:case=2}", "jarní a mladý"), "jarního a mladého");
}

#[test]
fn nominative_is_the_default() {
    assert_eq!(format("{0}", "mladý"), "mladý");
    assert_eq!(format("{0}", "jarní"), "jarní");
}

#[test]
fn shortcuts_expand_to_properties() {
    assert_eq!(format("{0:dat}", "mladý"), "mladému");
    assert_eq!(format("{0:f,pl,gen}", "mladý"), "mladých");
    assert_eq!(format("{0:n,pl}", "mladý"), "mladá");
    assert_eq!(format("{0:f,ins}", "mladý"), "mladou");
}

#[test]
fn animacy_selects_the_masculine_table() {
    assert_eq!(format("{0:acc}", "mladý"), "mladého");
    assert_eq!(format("{0:acc,inan}", "mladý"), "mladý");
    assert_eq!(format("{0:acc,animate=no}", "mladý"), "mladý");
    assert_eq!(format("{0:acc,animate=t}", "mladý"), "mladého");
    assert_eq!(format("{0:pl,inan}", "mladý"), "mladé");
}

#[test]
fn soft_adjective_forms() {
    assert_eq!(format("{0:f,gen}", "jarní"), "jarní");
    assert_eq!(format("{0:case=7,number=pl}", "jarní"), "jarními");
    assert_eq!(format("{0:loc}", "jarní"), "jarním");
}

#[test]
fn long_property_values_are_accepted() {
    assert_eq!(format("{0:case=2,number=plural,gender=fem}", "mladý"), "mladých");
}

#[test]
fn later_modifier_parts_override_earlier_ones() {
    assert_eq!(format("{0:case=2:case=3}", "mladý"), "mladému");
    assert_eq!(format("{0:gen,dat}", "mladý"), "mladému");
}

#[test]
fn decomposed_accents_are_recognised() {
    assert_eq!(format("{0:gen}", "mlady\u{301}"), "mladého");
}

#[test]
fn plain_words_do_not_change() {
    assert_eq!(format("{0:gen,pl}", "pes"), "pes");
    assert_eq!(format("{0:case=9}", "pes"), "pes");
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn mlady_nominative_singular() {
    assert_eq!(format("{0}", "mladý"), "mladý");
}

#[test]
fn mlady_genitive() {
    assert_eq!(format("{0:case=2}", "mladý"), "mladého");
}

#[test]
fn mlady_plural_is_masculine_animate() {
    assert_eq!(format("{0:number=pl}", "mladý"), "mladí");
}

#[test]
fn mlady_feminine() {
    assert_eq!(format("{0:gender=f}", "mladý"), "mladá");
}

#[test]
fn jarni_neuter_genitive_plural() {
    assert_eq!(format("{0:gender=n,case=2,number=pl}", "jarní"), "jarních");
}

#[test]
fn spaces_around_values_are_ignored() {
    assert_eq!(format("{0:case= 2}", "mladý"), "mladého");
    assert_eq!(format("{0:}", "mladý"), "mladý");
}

#[test]
fn repeated_inflection_gives_the_same_form() {
    let word = Word::new(Language::Czech, "jarní a mladý");
    let properties = Properties::new()
        .with("case", 2)
        .with("number", "pl")
        .with("gender", "n");
    let first = word.inflect(&properties).unwrap();
    for _ in 0..10 {
        assert_eq!(word.inflect(&properties).unwrap(), first);
    }
    assert_eq!(first, "jarních a mladých");
}

// =============================================================================
// Agreement between fields
// =============================================================================

#[test]
fn agreement_copies_source_word_properties() {
    let template = Template::new(Language::Czech, "{0:gen} {1:*0}");
    assert_eq!(template.format(&args!["mladý", "jarní"]).unwrap(), "mladého jarní");
}

#[test]
fn explicit_properties_beat_agreement() {
    let template = Template::new(Language::Czech, "{1:*0:case=3} {0}");
    assert_eq!(template.format(&args!["mladý", "jarní"]).unwrap(), "jarnímu mladý");

    let template = Template::new(Language::Czech, "{1:dat,*0} {0}");
    assert_eq!(template.format(&args!["mladý", "jarní"]).unwrap(), "jarnímu mladý");
}

#[test]
fn caller_typed_word_bypasses_dispatch() {
    let adjective = Word::with_variant(Variant::Czech(czech::Variant::HardAdjective), "malý");
    let template = Template::new(Language::Czech, "{0:f}");
    assert_eq!(template.format(&args![adjective]).unwrap(), "malá");
}

// =============================================================================
// Invalid property values
// =============================================================================

#[test]
fn out_of_range_case_is_an_error() {
    let err = czech().format_str("{0:case=9}", &args!["mladý"]).unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidProperty {
            field: "0".into(),
            property: "case".into(),
            value: "9".into(),
        }
    );
    assert_eq!(err.to_string(), "field '0': invalid value '9' for property 'case'");
}

#[test]
fn unknown_number_and_gender_values_are_errors() {
    for text in ["{w:number=dual}", "{w:gender=x}", "{w:case=0}", "{w:case=nom}"] {
        let result = czech().format_str(text, &args![; "w" => "mladý"]);
        assert!(
            matches!(result, Err(FormatError::InvalidProperty { ref field, .. }) if field == "w"),
            "{text}: {result:?}"
        );
    }
}

#[test]
fn word_inflect_reports_invalid_value() {
    let word = Word::new(Language::Czech, "mladý");
    let err = word.inflect(&Properties::new().with("gender", "x")).unwrap_err();
    assert_eq!(
        err,
        InflectionError::InvalidValue {
            property: "gender".into(),
            value: "x".into(),
        }
    );
}

// =============================================================================
// Word classes and tables
// =============================================================================

#[test]
fn dispatch_by_final_letter() {
    assert_eq!(czech::guess_type("mladý"), czech::Variant::HardAdjective);
    assert_eq!(czech::guess_type("jarní"), czech::Variant::SoftAdjective);
    assert_eq!(czech::guess_type("pes"), czech::Variant::Word);
    assert_eq!(czech::guess_type(""), czech::Variant::Word);
    assert_eq!(czech().guess_type("jarní"), Variant::Czech(czech::Variant::SoftAdjective));
}

#[test]
fn phrases_split_on_spaces() {
    let word = Word::new(Language::Czech, "jarní a mladý");
    assert!(word.is_phrase());
    let classes: Vec<&str> = word.lexemes().iter().map(|l| l.variant().name()).collect();
    assert_eq!(classes, vec!["soft-adjective", "word", "hard-adjective"]);
    assert_eq!(word.lexemes()[0].root(), "jarn");
    assert_eq!(word.variant(), Variant::Czech(czech::Variant::SoftAdjective));
}

#[test]
fn shortcut_table() {
    assert_eq!(czech::shortcut("ins"), Some(Properties::new().with("case", 7)));
    assert_eq!(czech::shortcut("pl"), Some(Properties::new().with("number", "pl")));
    assert_eq!(czech::shortcut("inan"), Some(Properties::new().with("animate", false)));
    assert_eq!(czech::shortcut("dual"), None);
    assert_eq!(czech::SHORTCUTS.len(), 14);
}

#[test]
fn case_bounds() {
    assert_eq!(Case::new(0), None);
    assert_eq!(Case::new(8), None);
    assert_eq!(Case::new(7).map(Case::get), Some(7));
    assert_eq!(Case::all().count(), czech::CASES);
}

#[test]
fn table_slots() {
    let first = Case::new(1).unwrap();
    let last = Case::new(7).unwrap();
    assert_eq!(InflectionTable::slot(first, Number::Singular), 0);
    assert_eq!(InflectionTable::slot(last, Number::Singular), 6);
    assert_eq!(InflectionTable::slot(first, Number::Plural), 7);
    assert_eq!(InflectionTable::slot(last, Number::Plural), czech::SLOTS - 1);
}

#[test]
fn adjective_paradigm() {
    let word = Word::new(Language::Czech, "mladý");
    let paradigm = word.paradigm().unwrap();
    assert_eq!(paradigm.len(), 4 * czech::SLOTS);

    let feminine: Vec<String> = paradigm
        .iter()
        .filter(|(key, _)| key.get("gender") == Some(&"f".into()))
        .map(|(key, form)| format!("{key}: {form}"))
        .collect();
    assert_snapshot!(feminine.join("\n"), @r"
    case=1, gender=f, number=sg: mladá
    case=2, gender=f, number=sg: mladé
    case=3, gender=f, number=sg: mladé
    case=4, gender=f, number=sg: mladou
    case=5, gender=f, number=sg: mladá
    case=6, gender=f, number=sg: mladé
    case=7, gender=f, number=sg: mladou
    case=1, gender=f, number=pl: mladé
    case=2, gender=f, number=pl: mladých
    case=3, gender=f, number=pl: mladým
    case=4, gender=f, number=pl: mladé
    case=5, gender=f, number=pl: mladé
    case=6, gender=f, number=pl: mladých
    case=7, gender=f, number=pl: mladými
    ");
}

#[test]
fn plain_word_paradigm_has_one_form() {
    let word = Word::new(Language::Czech, "pes");
    assert_eq!(word.paradigm().unwrap(), vec![(Properties::new(), "pes".to_string())]);
}
