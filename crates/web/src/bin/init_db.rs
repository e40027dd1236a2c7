//! Prepares the database for the server: applies the migrations and
//! optionally fills empty tables with example records.

use std::error::Error;

use clap::Parser;
use database::{seed::seed_examples, DatabaseConnectionInfo, PgDatabase};
use log::info;

#[derive(Debug, Parser)]
#[command(about = "Creates the site selection schema")]
struct Args {
    /// Insert example records into every table that is still empty.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let database = PgDatabase::connect(DatabaseConnectionInfo::from_env()?).await?;

    let result = bootstrap(&database, args.seed).await;
    database.close().await;
    result
}

async fn bootstrap(database: &PgDatabase, seed: bool) -> Result<(), Box<dyn Error>> {
    database.migrate().await?;
    info!("schema is up to date");

    if seed {
        let report = seed_examples(database).await?;
        info!(
            "seeded {} sites, {} charging stations, {} parking lots, {} recommendations",
            report.sites, report.charging_stations, report.parking_lots, report.recommendations
        );
    }

    Ok(())
}
