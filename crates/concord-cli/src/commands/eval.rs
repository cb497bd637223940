//! Implementation of the `concord eval` command.

use concord::{Arguments, Language, Template, Value};
use miette::IntoDiagnostic;
use serde::Serialize;

use super::LanguageArgs;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub language: LanguageArgs,

    /// Template string to evaluate
    #[arg(short, long)]
    pub template: String,

    /// Positional arguments, bound to {0}, {1}, ...
    pub values: Vec<String>,

    /// Keyword arguments in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub language: Language,
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

/// Integers become numbers, anything else stays text.
fn to_value(raw: String) -> Value {
    match raw.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(raw),
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let language = args.language.lang;
    let template = Template::new(language, args.template);

    let mut arguments = Arguments::new();
    for value in args.values {
        arguments.push(to_value(value));
    }
    for (name, value) in args.params {
        arguments.insert(name, to_value(value));
    }

    match template.format(&arguments) {
        Ok(result) => {
            if args.json {
                let output = EvalResult { language, result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
