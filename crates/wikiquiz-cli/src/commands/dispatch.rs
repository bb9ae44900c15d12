use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{config, generate, history, show};
use crate::context::AppContext;

impl Commands {
    /// Run the handler for this subcommand.
    pub async fn run(self, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
        match self {
            Self::Generate(args) => generate::handle(&args, ctx, flags).await,
            Self::History(args) => history::handle(&args, ctx, flags).await,
            Self::Show(args) => show::handle(&args, ctx, flags).await,
            Self::Config => config::handle(&ctx.config, flags),
        }
    }
}
