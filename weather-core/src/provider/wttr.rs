use async_trait::async_trait;
use reqwest::Client;

use crate::{FetchConfig, FetchError, Observation, Payload};

use super::WeatherProvider;

/// Fetches current conditions from wttr.in's JSON (`format=j1`) endpoint.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    config: FetchConfig,
    http: Client,
}

impl WttrProvider {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn fetch(&self, location: &str) -> Result<Observation, FetchError> {
        let url = self.config.request_url(location);
        tracing::debug!(%url, "requesting current conditions");

        let res = self.http.get(&url).send().await.map_err(|source| FetchError::Network {
            location: location.to_owned(),
            source,
        })?;

        let status = res.status();
        tracing::debug!(%status, "weather API responded");

        if !status.is_success() {
            return Err(FetchError::HttpStatus { location: location.to_owned(), status });
        }

        let body = res.bytes().await.map_err(|source| FetchError::BodyRead {
            location: location.to_owned(),
            source,
        })?;
        tracing::debug!(bytes = body.len(), "read response body");

        let payload: Payload = serde_json::from_slice(&body).map_err(|source| {
            FetchError::Decode { location: location.to_owned(), source }
        })?;

        payload
            .into_first_observation()
            .ok_or_else(|| FetchError::EmptyResult { location: location.to_owned() })
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn current_conditions(&self, location: &str) -> Result<Observation, FetchError> {
        self.fetch(location).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_keeps_config() {
        let cfg = FetchConfig::default().timeout(Duration::from_secs(3));
        let provider = WttrProvider::new(cfg.clone()).expect("client should build");

        assert_eq!(provider.config(), &cfg);
    }
}
