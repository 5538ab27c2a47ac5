use clap::Args;
use stockroom_app::database;

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to initialise database: {error}"))?;

    pool.close().await;

    println!("Initialized the database.");

    Ok(())
}
