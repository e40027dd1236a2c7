use std::{error::Error, sync::Arc};

use database::PgDatabase;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use web::{config::WebConfig, start_web_server, WebState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = WebConfig::from_env()?;

    // database
    let database = PgDatabase::connect(config.database.clone()).await?;

    // web server
    let state = WebState {
        database: Arc::new(database.clone()),
    };
    let served = start_web_server(&config, state).await;

    info!("closing database pool");
    database.close().await;

    Ok(served?)
}
