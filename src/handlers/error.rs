// src/handlers/error.rs
use std::fmt;
use warp::reject::Reject;

#[derive(Debug, Clone)]
pub enum ApiError {
    /// The market-data source failed or returned nothing usable.
    DataUnavailable(String),
    /// Request parameters outside the accepted range.
    InvalidRequest(String),
}

impl ApiError {
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        ApiError::DataUnavailable(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::DataUnavailable(message) | ApiError::InvalidRequest(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}
impl Reject for ApiError {}
