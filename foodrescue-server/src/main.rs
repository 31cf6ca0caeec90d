//! Process entry point for the FoodRescue backend.

use anyhow::{Context, Result};

use foodrescue_server::config::{load_dotenv, Config};
use foodrescue_server::tracing_setup::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    load_dotenv();

    let config = Config::from_env().context("Invalid configuration")?;

    foodrescue_server::serve(config)
        .await
        .context("Server error")?;

    Ok(())
}
