//! Tests for catalog hand-off and the template façade.

use std::thread;

use concord::{Language, TEMPLATE_SENTINEL, Template, Translated, Value, Word, args};

// =============================================================================
// Translated
// =============================================================================

#[test]
fn sentinel_marks_templates() {
    let translated = Translated::from_catalog("@{0:gen}", "cs_CZ.UTF-8");
    match &translated {
        Translated::Template(template) => {
            assert_eq!(template.language(), Language::Czech);
            assert_eq!(template.text(), "{0:gen}");
        }
        Translated::Verbatim(text) => panic!("expected a template, got {text:?}"),
    }
    assert_eq!(translated.format(&args!["mladý"]).unwrap(), "mladého");
    assert_eq!(translated.to_string(), "{0:gen}");
}

#[test]
fn plain_catalog_text_is_verbatim() {
    let translated = Translated::from_catalog("Hello {name}!", "en");
    assert_eq!(translated, Translated::Verbatim("Hello {name}!".into()));
    assert_eq!(translated.format(&args![]).unwrap(), "Hello {name}!");
    assert_eq!(translated.as_str(), "Hello {name}!");
}

#[test]
fn sentinel_only_counts_at_the_start() {
    let translated = Translated::from_catalog("mail me @ {0}", "en");
    assert!(matches!(translated, Translated::Verbatim(_)));
    assert_eq!(TEMPLATE_SENTINEL, '@');
}

#[test]
fn unknown_catalog_language_is_neutral() {
    let translated = Translated::from_catalog("@{0:case=2}", "de_DE");
    assert_eq!(translated.format(&args!["mladý"]).unwrap(), "mladý");
}

// =============================================================================
// Template
// =============================================================================

#[test]
fn template_behaves_like_its_text() {
    let template = Template::new(Language::English, "{=a:*0} {0}");
    assert_eq!(template.to_string(), "{=a:*0} {0}");
    assert_eq!(template.len(), 11);
    assert!(template.starts_with('{'));
    let text: &str = template.as_ref();
    assert_eq!(text, "{=a:*0} {0}");
}

#[test]
fn text_without_fields_formats_to_itself() {
    let plain = [
        "",
        "Hello, world!",
        "Dobrý den,\nžluťoučký kůň",
        "a apple, an pear",
        "tab\tand trailing space ",
    ];
    for language in Language::ALL {
        for text in plain {
            let template = Template::new(language, text);
            assert_eq!(template.format(&args![]).unwrap(), text, "{language}");
        }
    }
}

#[test]
fn builder_defaults_to_neutral() {
    let template = Template::builder().text("{0:case=2}").build();
    assert_eq!(template.language(), Language::Neutral);
    assert_eq!(template.format(&args!["mladý"]).unwrap(), "mladý");
    assert_eq!(template, Template::new(Language::Neutral, "{0:case=2}"));
}

#[test]
fn clones_compare_equal() {
    let template = Template::new(Language::Czech, "{0:gen}");
    let _ = template.compile();
    assert_eq!(template.clone(), template);
    assert_ne!(template, Template::new(Language::English, "{0:gen}"));
}

#[test]
fn word_values_render_with_their_own_language() {
    let word = Word::new(Language::Czech, "mladý");
    let template = Template::new(Language::English, "{0:case=2}");
    assert_eq!(template.format(&args![Value::Word(word)]).unwrap(), "mladého");
}

#[test]
fn formatting_is_shared_across_threads() {
    let template = Template::new(Language::Czech, "{0:case=*1} {1}");
    let words = ["mladý", "jarní", "starý", "pes"];
    thread::scope(|scope| {
        let handles: Vec<_> = words
            .iter()
            .map(|word| {
                let template = &template;
                scope.spawn(move || template.format(&args![*word, "mladý"]))
            })
            .collect();
        for (handle, word) in handles.into_iter().zip(words) {
            assert_eq!(handle.join().unwrap().unwrap(), format!("{word} mladý"));
        }
    });
}
