use clap::{Args, Subcommand};
use wikiquiz_core::entities::QuizId;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a quiz from a Wikipedia article.
    Generate(GenerateArgs),
    /// List previously generated quizzes.
    History(HistoryArgs),
    /// Show one stored quiz.
    Show(ShowArgs),
    /// Print the resolved configuration.
    Config,
}

/// Arguments for `wikiquiz generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Article URL, e.g. https://en.wikipedia.org/wiki/Cat
    pub url: String,
    /// Ask for 15 questions instead of 10.
    #[arg(long)]
    pub extra: bool,
    /// Answer the quiz interactively once it is ready.
    #[arg(long)]
    pub take: bool,
}

/// Arguments for `wikiquiz history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Keep refreshing until interrupted.
    #[arg(long)]
    pub watch: bool,
}

/// Arguments for `wikiquiz show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: QuizId,
    /// Answer the quiz interactively.
    #[arg(long)]
    pub take: bool,
}
