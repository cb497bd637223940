//! CLI command implementations.

mod check;
mod decline;
mod eval;

use clap::Args;
use concord::Language;

pub use check::{CheckArgs, run_check};
pub use decline::{DeclineArgs, run_decline};
pub use eval::{EvalArgs, run_eval};

/// Language selection shared by every command.
#[derive(Debug, Args)]
pub struct LanguageArgs {
    /// Language whose word system is used (en, cs or neutral)
    #[arg(long, env = "CONCORD_LANG", default_value_t = Language::Neutral)]
    pub lang: Language,
}

#[cfg(test)]
mod tests {
    use std::env::var_os;

    use clap::Parser;
    use concord::Language;

    use crate::{Cli, Commands};

    fn check_language(argv: &[&str]) -> Language {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Check(args) => args.language.lang,
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn lang_defaults_to_neutral() {
        if var_os("CONCORD_LANG").is_some() {
            return;
        }
        assert_eq!(check_language(&["concord", "check", "strings.txt"]), Language::Neutral);
    }

    #[test]
    fn lang_accepts_codes_and_names() {
        assert_eq!(
            check_language(&["concord", "check", "--lang", "cs", "strings.txt"]),
            Language::Czech
        );
        assert_eq!(
            check_language(&["concord", "check", "--lang", "english", "strings.txt"]),
            Language::English
        );
        assert_eq!(
            check_language(&["concord", "check", "--lang", "und", "strings.txt"]),
            Language::Neutral
        );
    }
}
