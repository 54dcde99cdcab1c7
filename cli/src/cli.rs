pub(crate) mod value;

use crate::command;
use clap::{Args, Parser, Subcommand};
use std::io;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "pngmeta",
    version,
    about = "A utility for embedding and extracting PNG text metadata",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub(crate) verbosity: VerbosityArgs,
    #[command(subcommand)]
    pub(crate) commands: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub(crate) enum Commands {
    #[command(about = "Embed a metadata payload into a PNG image")]
    Embed(command::embed::EmbedCommand),
    #[command(about = "Extract an embedded metadata payload from a PNG image")]
    Extract(command::extract::ExtractCommand),
    #[command(about = "Remove embedded metadata payloads from a PNG image")]
    Strip(command::strip::StripCommand),
    #[command(about = "Chunk level operations")]
    Chunk(command::chunk::ChunkCommand),
    #[command(about = "Generate shell auto complete")]
    Complete(command::complete::CompleteCommand),
}

#[derive(Args, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct VerbosityArgs {
    #[arg(long, global = true, help = "Make the operation more quiet")]
    quiet: bool,
    #[arg(long, global = true, help = "Make the operation more talkative")]
    verbose: bool,
}

impl VerbosityArgs {
    #[inline]
    fn log_level_filter(&self) -> log::LevelFilter {
        match (self.quiet, self.verbose) {
            (true, false) => log::LevelFilter::Warn,
            (false, true) => log::LevelFilter::Debug,
            _ => log::LevelFilter::Info,
        }
    }
}

impl Cli {
    pub fn init_logger(&self) -> anyhow::Result<()> {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}: {}",
                    record.level().to_string().to_lowercase(),
                    message
                ))
            })
            .level(self.verbosity.log_level_filter())
            .chain(io::stderr())
            .apply()?;
        Ok(())
    }
}
