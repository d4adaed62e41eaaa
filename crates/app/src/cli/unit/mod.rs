use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct UnitCommand {
    #[command(subcommand)]
    command: UnitSubcommand,
}

#[derive(Debug, Subcommand)]
enum UnitSubcommand {
    Create(create::CreateUnitArgs),
}

pub(crate) async fn run(command: UnitCommand) -> Result<(), String> {
    match command.command {
        UnitSubcommand::Create(args) => create::run(args).await,
    }
}
