use serde::Deserialize;
use thiserror::Error;

use crate::sdk::mtjson::MtJsonError;

// Helper structs to parse the JSON error envelope the routing API returns
#[derive(Deserialize, Debug)]
pub struct ApiErrorDetail {
    pub code: u32,
    pub message: String,
}
#[derive(Deserialize, Debug)]
pub struct ApiErrorPayload {
    pub error: ApiErrorDetail,
}

#[derive(Error, Debug)]
pub enum RoutingError {
    // Structured error reported by the API itself
    #[error("API error (code {code}): {message}")]
    Api { code: u32, message: String },

    // Fallback for error bodies that are not in the expected JSON format
    #[error("unstructured API error: {0}")]
    RawApi(String),

    #[error("no results for query: {0}")]
    NoResults(String),

    #[error("underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to decode MTJSON trip: {0}")]
    Decode(#[from] MtJsonError),

    #[error("device position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("{0}")]
    Generic(String),
}
