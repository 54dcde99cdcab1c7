use clap::Parser;
use png_metadata::{cli, command};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.init_logger()?;
    command::entry(cli)
}
