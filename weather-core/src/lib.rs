//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Explicit fetch configuration (endpoint template, timeout)
//! - The fetcher abstraction and its wttr.in implementation
//! - Wire and domain models (payload, observation)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::FetchConfig;
pub use error::FetchError;
pub use model::{Observation, Payload};
pub use provider::{WeatherProvider, wttr::WttrProvider};
