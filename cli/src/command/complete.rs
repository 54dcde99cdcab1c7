use crate::{cli::Cli, command::Command};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;

#[derive(Parser, Clone, Debug)]
pub(crate) struct CompleteCommand {
    #[arg(value_enum, help = "Target shell")]
    shell: Shell,
}

impl Command for CompleteCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        generate_completion(self)
    }
}

fn generate_completion(args: CompleteCommand) -> anyhow::Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "pngmeta", &mut io::stdout());
    Ok(())
}
