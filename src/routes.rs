// src/routes.rs
use std::convert::Infallible;

use log::info;
use reqwest::Client;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::analysis::get_analysis;
use crate::handlers::error::ApiError;
use crate::handlers::projection::run_projection;

// Recovery handling for our custom errors
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = match api_error {
            ApiError::InvalidRequest(_) => warp::http::StatusCode::BAD_REQUEST,
            ApiError::DataUnavailable(_) => warp::http::StatusCode::BAD_GATEWAY,
        };
        message = api_error.message().to_string();
    } else if let Some(body_error) = err.find::<warp::filters::body::BodyDeserializeError>() {
        code = warp::http::StatusCode::BAD_REQUEST;
        message = body_error.to_string();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(client: Client) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let client_filter = warp::any().map(move || client.clone());

    let analysis_route = warp::path!("api" / "v1" / "analysis" / String)
        .and(warp::get())
        .and(client_filter)
        .and_then(get_analysis);

    let projection_route = warp::path!("api" / "v1" / "projection")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(run_projection);

    info!("All routes configured successfully.");

    analysis_route.or(projection_route).recover(handle_rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fundamentals, ProjectionRequest};
    use crate::services::projection::default_assumptions;
    use crate::services::yahoo::build_client;

    fn sample_request(horizon_years: u32) -> ProjectionRequest {
        let fundamentals = Fundamentals {
            company_name: "Sample Corp".to_string(),
            price: 100.0,
            pe_ratio: 20.0,
            profit_margin_pct: 20.0,
            market_cap: 2000.0,
            revenue: 1000.0,
            free_cash_flow: 150.0,
            fcf_yield_pct: 7.5,
            fcf_margin_pct: 15.0,
        };
        let scenarios = default_assumptions(&fundamentals);
        ProjectionRequest {
            fundamentals,
            scenarios,
            horizon_years,
        }
    }

    #[tokio::test]
    async fn projection_route_returns_results_and_chart() {
        let api = routes(build_client().unwrap());

        let resp = warp::test::request()
            .method("POST")
            .path("/api/v1/projection")
            .json(&sample_request(5))
            .reply(&api)
            .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
        assert_eq!(body["results"][0]["scenario"], "Bear");
        assert_eq!(body["chart"][0]["label"], "Current");
        assert_eq!(body["chart"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn projection_route_rejects_out_of_range_horizon() {
        let api = routes(build_client().unwrap());

        for horizon_years in [2, 11] {
            let resp = warp::test::request()
                .method("POST")
                .path("/api/v1/projection")
                .json(&sample_request(horizon_years))
                .reply(&api)
                .await;

            assert_eq!(resp.status(), 400);
            let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
            assert!(body["error"]
                .as_str()
                .unwrap()
                .contains("horizon_years must be between"));
        }
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let api = routes(build_client().unwrap());

        let resp = warp::test::request()
            .method("GET")
            .path("/api/v1/nope")
            .reply(&api)
            .await;

        assert_eq!(resp.status(), 404);
    }
}
