use crate::{FetchError, Observation};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

/// Source of current weather conditions for a named location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the first reported observation for `location`.
    ///
    /// Makes exactly one upstream request; no retries.
    async fn current_conditions(&self, location: &str) -> Result<Observation, FetchError>;
}
