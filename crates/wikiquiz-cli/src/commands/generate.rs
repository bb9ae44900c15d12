use anyhow::{Context, bail};
use wikiquiz_session::SubmitOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::take;
use crate::context::AppContext;
use crate::progress::Spinner;

/// Handle `wikiquiz generate`.
pub async fn handle(
    args: &GenerateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let generation = &ctx.session.generation;
    let extra_questions = args.extra || ctx.config.general.extra_questions;

    let spinner = Spinner::start("Generating quiz... This may take 30-60 seconds.");
    match generation.submit(&args.url, extra_questions).await {
        SubmitOutcome::Succeeded => drop(spinner),
        SubmitOutcome::Invalid(reason) => bail!("{reason}"),
        SubmitOutcome::Failed(failure) => {
            spinner.fail(failure.message.clone());
            bail!("{failure}");
        }
        SubmitOutcome::Busy | SubmitOutcome::Superseded => {
            bail!("quiz generation was interrupted")
        }
    }

    let quiz = generation
        .state()
        .quiz()
        .cloned()
        .context("generation finished without a quiz")?;
    take::present(quiz, args.take, flags).await
}
