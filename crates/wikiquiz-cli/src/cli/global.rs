use clap::{Args, ValueEnum};

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns for people.
    #[default]
    Table,
    /// Compact JSON, one document per line.
    Raw,
}

/// Flags accepted anywhere on the command line.
#[derive(Clone, Debug, Default, Args)]
pub struct GlobalFlags {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL, overriding every config source
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,
}

impl GlobalFlags {
    /// Default tracing filter when `WIKIQUIZ_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, true) => "debug",
            (false, false) => "warn",
        }
    }
}
