use reqwest::StatusCode;
use thiserror::Error;

/// Ways a single fetch can fail. Each attempt ends in at most one of these.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be set up (e.g. TLS backend).
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("failed to make request for location: {location}")]
    Network {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("weather API returned status {status} for location: {location}")]
    HttpStatus { location: String, status: StatusCode },

    #[error("failed to read response body for location: {location}")]
    BodyRead {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse weather data for location: {location}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no weather data found for location: {location}")]
    EmptyResult { location: String },
}

impl FetchError {
    /// Status code of a non-success response, if that is what went wrong.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
