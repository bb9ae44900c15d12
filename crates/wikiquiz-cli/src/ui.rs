//! Terminal capabilities, resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// What the process environment looks like, separated out for testing.
#[derive(Clone, Debug, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    pub no_color: bool,
    pub columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

impl UiPrefs {
    #[must_use]
    pub fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> Self {
        let loud = !flags.quiet;
        Self {
            table_color: loud
                && terminal.stdout_tty
                && !terminal.no_color
                && flags.format == OutputFormat::Table,
            // Spinners draw on stderr; stdout may be piped.
            progress: loud && terminal.stderr_tty,
            term_width: terminal
                .columns
                .as_deref()
                .and_then(|value| value.trim().parse().ok())
                .filter(|width| *width >= MIN_TERM_WIDTH),
        }
    }
}

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = PREFS.set(UiPrefs::resolve(flags, &Terminal::detect()));
}

/// Plain output until [`init`] has run.
#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
            api_base: None,
        }
    }

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            stderr_tty: true,
            no_color: false,
            columns: Some("120".into()),
        }
    }

    #[test]
    fn interactive_table_gets_everything() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, false), &tty());
        assert_eq!(
            prefs,
            UiPrefs {
                table_color: true,
                progress: true,
                term_width: Some(120),
            }
        );
    }

    #[test]
    fn quiet_disables_color_and_spinners() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, true), &tty());
        assert!(!prefs.table_color);
        assert!(!prefs.progress);
    }

    #[test]
    fn piped_stdout_keeps_spinner_but_not_color() {
        let terminal = Terminal {
            stdout_tty: false,
            ..tty()
        };
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, false), &terminal);
        assert!(!prefs.table_color);
        assert!(prefs.progress);
    }

    #[test]
    fn no_color_and_json_skip_color() {
        let terminal = Terminal {
            no_color: true,
            ..tty()
        };
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Table, false), &terminal).table_color);
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Json, false), &tty()).table_color);
    }

    #[test]
    fn narrow_or_bogus_columns_are_ignored() {
        for columns in ["20", "wide", ""] {
            let terminal = Terminal {
                columns: Some(columns.into()),
                ..tty()
            };
            let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, false), &terminal);
            assert_eq!(prefs.term_width, None, "COLUMNS={columns}");
        }
    }
}
