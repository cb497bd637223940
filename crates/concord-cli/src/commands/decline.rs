//! Implementation of the `concord decline` command.

use concord::{Formatter, Language, Properties};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::LanguageArgs;
use crate::output::table::format_paradigm_table;

/// Arguments for the decline command.
#[derive(Debug, clap::Args)]
pub struct DeclineArgs {
    #[command(flatten)]
    pub language: LanguageArgs,

    /// Word or phrase to decline
    pub word: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Form {
    properties: Properties,
    form: String,
}

/// JSON output for decline results.
#[derive(Serialize)]
struct Declension {
    language: Language,
    word: String,
    classes: Vec<&'static str>,
    forms: Vec<Form>,
}

/// Run the decline command.
pub fn run_decline(args: DeclineArgs) -> miette::Result<i32> {
    let language = args.language.lang;
    let word = Formatter::new(language).word(args.word);
    let classes: Vec<&'static str> = word
        .lexemes()
        .iter()
        .map(|lexeme| lexeme.variant().name())
        .collect();
    let paradigm = word.paradigm().into_diagnostic()?;

    if args.json {
        let output = Declension {
            language,
            word: word.text().to_string(),
            classes,
            forms: paradigm
                .into_iter()
                .map(|(properties, form)| Form { properties, form })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    println!(
        "{} ({language}): {}",
        word.text().if_supports_color(Stream::Stdout, |t| t.bold()),
        classes.join(" ")
    );
    println!("{}", format_paradigm_table(&paradigm));
    Ok(exitcode::OK)
}
