// src/handlers/analysis.rs
use chrono::Utc;
use log::{error, info};
use reqwest::Client;
use warp::reply::Json;
use warp::Rejection;

use crate::models::AnalysisResponse;
use crate::services::fundamentals::extract;
use crate::services::projection::{default_assumptions, DEFAULT_HORIZON_YEARS};
use crate::services::yahoo::fetch_raw_financials;

use super::error::ApiError;

pub async fn get_analysis(ticker: String, client: Client) -> Result<Json, Rejection> {
    let ticker = ticker.to_uppercase();
    info!("Handling analysis request for {}", ticker);

    let raw = fetch_raw_financials(&client, &ticker).await.map_err(|e| {
        error!("Failed to fetch financials for {}: {}", ticker, e);
        warp::reject::custom(ApiError::data_unavailable(format!(
            "Error fetching data for {}. Please check the ticker or internet connection. Details: {}",
            ticker, e
        )))
    })?;

    let fundamentals = extract(&ticker, &raw);
    let assumptions = default_assumptions(&fundamentals);

    info!(
        "Extracted fundamentals for {}: price {}, mcap {}",
        ticker, fundamentals.price, fundamentals.market_cap
    );

    Ok(warp::reply::json(&AnalysisResponse {
        ticker,
        fundamentals,
        assumptions,
        horizon_years: DEFAULT_HORIZON_YEARS,
        fetched_at: Utc::now(),
    }))
}
