use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// `wikiquiz` command line.
#[derive(Debug, Parser)]
#[command(
    name = "wikiquiz",
    version,
    about = "Generate and take quizzes built from Wikipedia articles"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub flags: GlobalFlags,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wikiquiz").chain(args.iter().copied()))
            .expect("cli should parse")
    }

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_work_on_either_side_of_the_subcommand() {
        let before = parse(&["--format", "json", "--verbose", "history"]);
        assert_eq!(before.flags.format, OutputFormat::Json);
        assert_eq!(before.flags.log_level(), "debug");
        assert!(matches!(before.command, Commands::History(_)));

        let after = parse(&["config", "--format", "raw", "-q"]);
        assert_eq!(after.flags.format, OutputFormat::Raw);
        assert_eq!(after.flags.log_level(), "error");
        assert!(matches!(after.command, Commands::Config));
    }

    #[test]
    fn defaults_to_table_and_warn() {
        let cli = parse(&["history"]);
        assert_eq!(cli.flags.format, OutputFormat::Table);
        assert_eq!(cli.flags.log_level(), "warn");
        assert_eq!(cli.flags.api_base, None);
    }

    #[test]
    fn rejects_unknown_format_and_quiet_with_verbose() {
        assert!(Cli::try_parse_from(["wikiquiz", "--format", "xml", "history"]).is_err());
        assert!(Cli::try_parse_from(["wikiquiz", "-q", "-v", "history"]).is_err());
    }

    #[test]
    fn generate_takes_url_and_switches() {
        let cli = parse(&["generate", "https://en.wikipedia.org/wiki/Cat", "--extra", "--take"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.url, "https://en.wikipedia.org/wiki/Cat");
        assert!(args.extra);
        assert!(args.take);
    }

    #[test]
    fn show_needs_a_numeric_id() {
        let cli = parse(&["show", "42"]);
        assert!(matches!(cli.command, Commands::Show(ref args) if args.id == 42 && !args.take));
        assert!(Cli::try_parse_from(["wikiquiz", "show", "cat"]).is_err());
    }

    #[test]
    fn history_can_watch() {
        let cli = parse(&["history", "--watch"]);
        assert!(matches!(cli.command, Commands::History(ref args) if args.watch));
    }

    #[test]
    fn api_base_is_captured() {
        let cli = parse(&["--api-base", "http://quiz.internal:9000", "history"]);
        assert_eq!(cli.flags.api_base.as_deref(), Some("http://quiz.internal:9000"));
    }
}
