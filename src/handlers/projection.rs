// src/handlers/projection.rs
use log::info;
use warp::reply::Json;
use warp::Rejection;

use crate::models::{ProjectionRequest, ProjectionResponse};
use crate::services::projection::{chart_series, project, MAX_HORIZON_YEARS, MIN_HORIZON_YEARS};

use super::error::ApiError;

pub async fn run_projection(request: ProjectionRequest) -> Result<Json, Rejection> {
    if request.horizon_years < MIN_HORIZON_YEARS || request.horizon_years > MAX_HORIZON_YEARS {
        return Err(warp::reject::custom(ApiError::invalid_request(format!(
            "horizon_years must be between {} and {}, got {}",
            MIN_HORIZON_YEARS, MAX_HORIZON_YEARS, request.horizon_years
        ))));
    }

    info!(
        "Running projection for {} over {} years ({} scenarios)",
        request.fundamentals.company_name,
        request.horizon_years,
        request.scenarios.len()
    );

    let results = project(&request.fundamentals, &request.scenarios, request.horizon_years);
    let chart = chart_series(&request.fundamentals, &results);

    Ok(warp::reply::json(&ProjectionResponse { results, chart }))
}
