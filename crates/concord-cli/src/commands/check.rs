//! Implementation of the `concord check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use concord::{Language, Template};
use log::debug;
use miette::{IntoDiagnostic, Report, WrapErr};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::LanguageArgs;
use crate::output::TemplateDiagnostic;
use crate::output::table::{LintRow, format_lint_table};

/// Arguments for the check command.
///
/// Every non-empty line of a file is one template; lines starting with `#`
/// are comments.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub language: LanguageArgs,

    /// Template files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one problem.
#[derive(Debug, Serialize)]
struct Finding {
    file: String,
    line: usize,
    kind: &'static str,
    field: Option<String>,
    message: String,
}

/// Result of checking every file.
#[derive(Debug, Default)]
struct CheckSummary {
    templates: usize,
    syntax_errors: usize,
    findings: Vec<Finding>,
    lint_rows: Vec<LintRow>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let language = args.language.lang;
    let mut totals = CheckSummary::default();

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read template file {}", path.display()))?;
        check_file(path, &content, language, args.json, &mut totals);
    }

    if args.json {
        let output = serde_json::json!({
            "language": language,
            "templates": totals.templates,
            "findings": totals.findings,
        });
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        if !totals.lint_rows.is_empty() {
            println!("{}", format_lint_table(&totals.lint_rows));
        }
        let summary = format!(
            "{} template(s) checked: {} syntax error(s), {} warning(s)",
            totals.templates,
            totals.syntax_errors,
            totals.lint_rows.len()
        );
        if totals.syntax_errors > 0 {
            println!("{}", summary.if_supports_color(Stream::Stdout, |t| t.red()));
        } else if totals.lint_rows.is_empty() {
            println!("{}", summary.if_supports_color(Stream::Stdout, |t| t.green()));
        } else {
            println!("{}", summary.if_supports_color(Stream::Stdout, |t| t.yellow()));
        }
    }

    if totals.syntax_errors > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn check_file(
    path: &Path,
    content: &str,
    language: Language,
    json: bool,
    totals: &mut CheckSummary,
) {
    let file = path.display().to_string();
    let mut line_start = 0;

    for (index, raw_line) in content.split_inclusive('\n').enumerate() {
        let start = line_start;
        line_start += raw_line.len();
        let line = raw_line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        totals.templates += 1;
        let template = Template::new(language, line);
        let warnings = match template.lint() {
            Ok(warnings) => warnings,
            Err(err) => {
                totals.syntax_errors += 1;
                if json {
                    totals.findings.push(Finding {
                        file: file.clone(),
                        line: index + 1,
                        kind: "syntax",
                        field: None,
                        message: err.message().to_string(),
                    });
                } else {
                    let diagnostic =
                        TemplateDiagnostic::from_parse_error(path, content, start, &err);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                continue;
            }
        };

        debug!("{file}:{}: {} warning(s)", index + 1, warnings.len());
        for warning in warnings {
            totals.findings.push(Finding {
                file: file.clone(),
                line: index + 1,
                kind: "lint",
                field: Some(warning.field().to_string()),
                message: warning.to_string(),
            });
            totals.lint_rows.push(LintRow {
                file: file.clone(),
                line: index + 1,
                field: warning.field().to_string(),
                message: warning.to_string(),
            });
        }
    }
}
