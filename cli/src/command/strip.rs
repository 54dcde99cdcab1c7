use crate::command::Command;
use anyhow::Context;
use clap::Parser;
use std::{fs, path::PathBuf};

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct StripCommand {
    #[arg(help = "Source image")]
    image: PathBuf,
    #[arg(short, long, help = "Write the result here instead of in place")]
    output: Option<PathBuf>,
}

impl Command for StripCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        strip_metadata(self)
    }
}

fn strip_metadata(args: StripCommand) -> anyhow::Result<()> {
    let image = fs::read(&args.image)
        .with_context(|| format!("failed to read {}", args.image.display()))?;
    let stripped = libpngmeta::strip_text(&image)
        .with_context(|| format!("{} is not a PNG image", args.image.display()))?;
    let removed = image.len() - stripped.len();
    let output = args.output.as_ref().unwrap_or(&args.image);
    fs::write(output, &stripped)
        .with_context(|| format!("failed to write {}", output.display()))?;
    if removed == 0 {
        log::info!("no embedded metadata in {}", args.image.display());
    } else {
        log::info!("removed {removed} metadata bytes from {}", output.display());
    }
    Ok(())
}
