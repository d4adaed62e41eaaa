use clap::{Parser, Subcommand};

mod db;
mod shop;
mod unit;

#[derive(Debug, Parser)]
#[command(name = "pantry-app", about = "Pantry CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Shop(shop::ShopCommand),
    Unit(unit::UnitCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Shop(command) => shop::run(command).await,
            Commands::Unit(command) => unit::run(command).await,
        }
    }
}
