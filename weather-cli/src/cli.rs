use std::ffi::OsString;
use std::io::{self, Write};
use std::iter;

use anyhow::{Context, anyhow};
use clap::Parser;
use weather_core::{FetchConfig, WeatherProvider, WttrProvider};

use crate::render;

pub const DEFAULT_LOCATION: &str = "Budapest";

/// Top-level CLI struct.
///
/// There are no flags: every argument is a raw value and only the first one is used.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    about = "Show current weather for a location",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Location name, used verbatim (e.g. "Tokyo", "New York", "~Eiffel Tower").
    /// Anything after it is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments. See [`Cli::try_parse_verbatim`].
    pub fn parse_verbatim() -> Self {
        Self::try_parse_verbatim(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parse `args` (program name first) without interpreting any of them.
    ///
    /// A `--` is inserted after the program name so clap treats everything that
    /// follows, a user-supplied `--` included, as positional values.
    pub fn try_parse_verbatim<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("weather"));

        Self::try_parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(args))
    }

    /// The first argument, or [`DEFAULT_LOCATION`] when none was given.
    pub fn location(&self) -> anyhow::Result<&str> {
        match self.args.first() {
            Some(arg) => arg
                .to_str()
                .ok_or_else(|| anyhow!("Location is not valid UTF-8: {}", arg.to_string_lossy())),
            None => Ok(DEFAULT_LOCATION),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let provider = WttrProvider::new(FetchConfig::default())
            .context("Failed to initialise weather client")?;
        tracing::debug!(
            endpoint = %provider.config().endpoint_template,
            timeout = ?provider.config().timeout,
            "weather client ready"
        );

        self.run_with(&provider, &mut io::stdout()).await
    }

    /// Fetch once through `provider` and print the report to `out`.
    pub async fn run_with<W: Write>(
        &self,
        provider: &dyn WeatherProvider,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let location = self.location()?;
        tracing::debug!(location, "fetching current conditions");

        let observation = provider
            .current_conditions(location)
            .await
            .context("Error fetching weather data")?;

        render::render(out, location, &observation).context("Failed to write weather report")
    }
}
