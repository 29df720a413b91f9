use std::time::Duration;

/// Placeholder replaced by the requested location in [`FetchConfig::endpoint_template`].
pub const LOCATION_PLACEHOLDER: &str = "{location}";

pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://wttr.in/{location}?format=j1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings handed to a fetcher at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// URL with a `{location}` placeholder, e.g. `https://wttr.in/{location}?format=j1`.
    pub endpoint_template: String,

    /// Upper bound for the whole request, body included.
    pub timeout: Duration,

    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint_template: DEFAULT_ENDPOINT_TEMPLATE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("weather-cli/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Config pointing at a different endpoint, keeping the default timeout and user agent.
    pub fn with_endpoint(template: impl Into<String>) -> Self {
        Self { endpoint_template: template.into(), ..Self::default() }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the request URL for `location`.
    ///
    /// The location is inserted as-is: no trimming, escaping or validation.
    pub fn request_url(&self, location: &str) -> String {
        self.endpoint_template.replace(LOCATION_PLACEHOLDER, location)
    }
}
