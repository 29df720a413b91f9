//! Terminal report for one observation.

use std::io::{self, Write};

use colored::Colorize;
use weather_core::Observation;

pub fn format_header(location: &str) -> String {
    format!("Your Weather Location: {location}")
}

/// Space-joined description phrases, trimmed at both ends.
pub fn join_descriptions(descriptions: &[String]) -> String {
    descriptions.join(" ").trim().to_string()
}

pub fn format_body(observation: &Observation) -> String {
    format!(
        "Temperature: {}°C\nHumidity:    {}%\nFeels Like:  {}°C\nUV Index:    {}\nDescription: {}",
        observation.temperature_c,
        observation.humidity,
        observation.feels_like_c,
        observation.uv_index,
        join_descriptions(&observation.descriptions),
    )
}

/// Write the yellow header and the green body to `out`.
pub fn render<W: Write>(out: &mut W, location: &str, observation: &Observation) -> io::Result<()> {
    writeln!(out, "{}", format_header(location).as_str().yellow())?;
    writeln!(out, "{}", format_body(observation).as_str().green())?;
    out.flush()
}
