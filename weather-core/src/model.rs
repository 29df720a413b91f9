use serde::Deserialize;

/// Top-level `?format=j1` response. Only the fields we display are modelled;
/// everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,
}

/// One entry of `current_condition`. Missing fields decode as empty strings.
///
/// Numeric-looking values are kept as text, exactly as the upstream sends them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    pub humidity: String,
    #[serde(rename = "uvIndex")]
    pub uv_index: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WeatherDesc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherDesc {
    pub value: String,
}

/// Current conditions for one location, as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observation {
    pub temperature_c: String,
    pub feels_like_c: String,
    pub humidity: String,
    pub uv_index: String,
    pub descriptions: Vec<String>,
}

impl From<CurrentCondition> for Observation {
    fn from(c: CurrentCondition) -> Self {
        Self {
            temperature_c: c.temp_c,
            feels_like_c: c.feels_like_c,
            humidity: c.humidity,
            uv_index: c.uv_index,
            descriptions: c.weather_desc.into_iter().map(|d| d.value).collect(),
        }
    }
}

impl Payload {
    /// First reported observation, or `None` when the collection is empty.
    pub fn into_first_observation(self) -> Option<Observation> {
        self.current_condition.into_iter().next().map(Observation::from)
    }
}
