pub(crate) mod chunk;
pub(crate) mod complete;
pub(crate) mod embed;
pub(crate) mod extract;
pub(crate) mod strip;

use crate::cli::{Cli, Commands};

pub fn entry(cli: Cli) -> anyhow::Result<()> {
    match cli.commands {
        Commands::Embed(cmd) => cmd.execute(),
        Commands::Extract(cmd) => cmd.execute(),
        Commands::Strip(cmd) => cmd.execute(),
        Commands::Chunk(cmd) => cmd.execute(),
        Commands::Complete(cmd) => cmd.execute(),
    }
}

pub(crate) trait Command {
    fn execute(self) -> anyhow::Result<()>;
}
