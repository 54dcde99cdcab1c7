use crate::command::Command;
use clap::Parser;
use libpngmeta::MIN_CHUNK_BYTES_SIZE;
use libpngmeta::prelude::*;
use std::{fs, path::PathBuf};
use tabled::{builder::Builder as TableBuilder, settings::Style as TableStyle};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub(crate) struct ChunkCommand {
    #[command(subcommand)]
    command: ChunkCommands,
}

impl Command for ChunkCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        match self.command {
            ChunkCommands::List(cmd) => cmd.execute(),
        }
    }
}

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ChunkCommands {
    #[command(about = "List chunks")]
    List(ListCommand),
}

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ListCommand {
    #[arg(short, long, help = "Display chunk body")]
    pub(crate) long: bool,
    #[arg(long, help = "Add a header row to each column")]
    pub(crate) header: bool,
    #[arg()]
    pub(crate) image: PathBuf,
}

impl Command for ListCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        list_image_chunks(self)
    }
}

fn list_image_chunks(args: ListCommand) -> anyhow::Result<()> {
    let image = fs::File::open(args.image)?;
    let mut builder = TableBuilder::new();
    if args.header {
        builder.push_record(
            ["Index", "Type", "Size", "Offset", "Crc"]
                .into_iter()
                .chain(args.long.then_some("Body")),
        )
    }
    let mut offset = libpngmeta::PNG_SIGNATURE.len();
    let mut idx = 0;
    for chunk in libpngmeta::read_as_chunks(image)? {
        let chunk = chunk?;
        idx += 1;
        builder.push_record(
            [
                idx.to_string(),
                chunk.ty().to_string(),
                chunk.length().to_string(),
                format!("{offset:#06x}"),
                if chunk.verify_crc() { "ok" } else { "bad" }.to_string(),
            ]
            .into_iter()
            .chain(
                args.long
                    .then(|| String::from_utf8_lossy(chunk.data()).into_owned()),
            ),
        );
        offset += chunk.length() as usize + MIN_CHUNK_BYTES_SIZE;
    }
    let mut table = builder.build();
    table.with(TableStyle::empty());
    println!("{table}");
    Ok(())
}
