use clap::{Parser, Subcommand};

mod db;
mod sales;

#[derive(Debug, Parser)]
#[command(name = "stockroom-app", about = "Stockroom CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Sales(sales::SalesCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Sales(command) => sales::run(command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sales_import() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "stockroom-app",
            "sales",
            "import",
            "--database-url",
            "sqlite::memory:",
            "--file",
            "sales.csv",
        ])?;

        assert!(matches!(cli.command, Commands::Sales(_)));

        Ok(())
    }
}
