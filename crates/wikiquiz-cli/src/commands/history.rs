use anyhow::{Context, bail};
use wikiquiz_core::entities::QuizSummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::context::AppContext;
use crate::output::quiz::render_history;
use crate::progress::Spinner;

/// Handle `wikiquiz history`.
pub async fn handle(
    args: &HistoryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.watch {
        return watch(ctx, flags).await;
    }

    let spinner = Spinner::start("Loading history...");
    let refreshed = ctx.session.history.refresh_now().await;
    drop(spinner);
    match refreshed {
        Ok(quizzes) => {
            println!("{}", render_history(&quizzes, flags.format)?);
            Ok(())
        }
        Err(failure) => bail!("Failed to load history: {failure}"),
    }
}

/// Print every refresh until Ctrl-C.
async fn watch(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let poller = &ctx.session.history;
    let format = flags.format;

    poller.start(Some(Box::new(move |quizzes: &[QuizSummary]| {
        match render_history(quizzes, format) {
            Ok(text) => println!("{text}\n"),
            Err(error) => tracing::warn!(%error, "failed to render history"),
        }
    })));

    if !flags.quiet {
        let every = ctx.config.history.poll_interval().as_secs_f64();
        eprintln!("Refreshing every {every}s. Press Ctrl-C to stop.");
    }

    let interrupted = tokio::signal::ctrl_c().await;
    poller.stop();
    interrupted.context("failed to listen for Ctrl-C")
}
