use crate::command::Command;
use anyhow::Context;
use clap::Parser;
use std::{fs, path::PathBuf};

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ExtractCommand {
    #[arg(help = "Source image")]
    image: PathBuf,
    #[arg(long, help = "Extract only this exact keyword")]
    keyword: Option<String>,
    #[arg(short, long, help = "Write the payload here instead of stdout")]
    output: Option<PathBuf>,
}

impl Command for ExtractCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        extract_metadata(self)
    }
}

fn extract_metadata(args: ExtractCommand) -> anyhow::Result<()> {
    let image = fs::read(&args.image)
        .with_context(|| format!("failed to read {}", args.image.display()))?;
    let text = match &args.keyword {
        Some(keyword) => libpngmeta::extract_text_with(&image, keyword),
        None => libpngmeta::extract_text(&image),
    };
    let Some(text) = text else {
        anyhow::bail!("no embedded metadata found in {}", args.image.display());
    };
    match &args.output {
        Some(path) => fs::write(path, &text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}
