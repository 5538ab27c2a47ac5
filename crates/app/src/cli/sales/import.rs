use std::path::{Path, PathBuf};

use clap::Args;
use csv::{ReaderBuilder, Trim};
use stockroom_app::{
    database::{self, Db},
    domain::sales::{SalesService, SqliteSalesService, data::NewSalesRecord},
};

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// CSV file with a `product_name,sales_date,quantity_sold,total_revenue` header
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(args: ImportArgs) -> Result<(), String> {
    let records = read_records(&args.file)?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to initialise database: {error}"))?;

    let inserted = SqliteSalesService::new(Db::new(pool.clone()))
        .import_sales(records)
        .await
        .map_err(|error| format!("failed to import sales: {error}"))?;

    pool.close().await;

    println!("imported {inserted} sales records");

    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<NewSalesRecord>, String> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|error| format!("failed to open {}: {error}", path.display()))?;

    reader
        .deserialize()
        .collect::<Result<Vec<NewSalesRecord>, _>>()
        .map_err(|error| format!("invalid sales file {}: {error}", path.display()))
}
