use anyhow::{anyhow, Result};
use dotenv::dotenv;
use log::{error, info};
use std::env;

use scenario_dashboard::services::fundamentals::extract;
use scenario_dashboard::services::yahoo::{build_client, fetch_raw_financials};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let ticker = env::args()
        .nth(1)
        .unwrap_or_else(|| "GOOG".to_string())
        .to_uppercase();
    info!("Testing Yahoo Finance fundamentals fetch for {}...", ticker);

    let client = build_client()?;
    match fetch_raw_financials(&client, &ticker).await {
        Ok(raw) => {
            info!("SUCCESS: raw financials: {:?}", raw);
            let fundamentals = extract(&ticker, &raw);
            info!("Extracted fundamentals: {:?}", fundamentals);
        }
        Err(e) => {
            error!("ERROR: Failed to fetch financials for {}: {}", ticker, e);
            return Err(anyhow!("{}", e));
        }
    }

    Ok(())
}
