use clap::{Args, Subcommand};

mod import;

#[derive(Debug, Args)]
pub(crate) struct SalesCommand {
    #[command(subcommand)]
    command: SalesSubcommand,
}

#[derive(Debug, Subcommand)]
enum SalesSubcommand {
    /// Bulk import sales records from a CSV file
    Import(import::ImportArgs),
}

pub(crate) async fn run(command: SalesCommand) -> Result<(), String> {
    match command.command {
        SalesSubcommand::Import(args) => import::run(args).await,
    }
}
