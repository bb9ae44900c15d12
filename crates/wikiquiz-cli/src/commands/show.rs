use anyhow::{Context, bail};
use wikiquiz_session::OpenOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::take;
use crate::context::AppContext;
use crate::progress::Spinner;

/// Handle `wikiquiz show`. A failed load is reported as a blocking notice
/// and a non-zero exit.
pub async fn handle(
    args: &ShowArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let detail = &ctx.session.detail;

    let spinner = Spinner::start(format!("Loading quiz {}...", args.id));
    let opened = detail.open(args.id).await;
    drop(spinner);
    match opened {
        Ok(OpenOutcome::Opened) => {}
        Ok(OpenOutcome::Discarded) => bail!("quiz {} was closed before it loaded", args.id),
        Err(failure) => bail!("Failed to load quiz details: {failure}"),
    }

    let quiz = detail
        .state()
        .quiz()
        .cloned()
        .context("detail view closed unexpectedly")?;
    let result = take::present(quiz, args.take, flags).await;
    detail.close();
    result
}
