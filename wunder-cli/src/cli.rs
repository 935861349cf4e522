use anyhow::Context;
use clap::{Parser, Subcommand};
use wunder_core::{Config, StateCountryShortforms, WeatherQuery, WundergroundClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wunder", version, about = "Weather conditions and forecasts from Wunderground")]
pub struct Cli {
    /// Name used for remembering your last queried location.
    #[arg(long, global = true, default_value = "default")]
    pub user: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for a location (US zip code, "city, state" or "city, country").
    Show {
        /// Location words; omit to reuse your previous location.
        location: Vec<String>,
    },

    /// Configure unit display and forecast settings interactively.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Show { location } => {
                let location = Some(location.join(" ")).filter(|l| !l.trim().is_empty());

                let client = WundergroundClient::new()?;
                let shortforms = StateCountryShortforms;
                let query = WeatherQuery::new(&client, &shortforms);

                let display = config.display.clone();
                let result =
                    query.run(&self.user, location.as_deref(), &mut config, &display).await;

                // The attempted location is remembered even when the query
                // failed, so save before surfacing any error.
                config.save()?;

                println!("{}", result?);
            }
            Command::Configure => {
                configure(&mut config)?;
                config.save()?;
                println!("Saved to {}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let display = &mut config.display;

    display.imperial = inquire::Confirm::new("Show imperial units (Fahrenheit, mph, inHg)?")
        .with_default(display.imperial)
        .prompt()?;

    display.metric = inquire::Confirm::new("Show metric units (Celsius, km/h, kPa)?")
        .with_default(display.metric)
        .prompt()?;

    display.show_forecast = inquire::Confirm::new("Show the forecast after current conditions?")
        .with_default(display.show_forecast)
        .prompt()?;

    if display.show_forecast {
        let days = inquire::Text::new("How many forecast days? (0 = all)")
            .with_initial_value(&display.forecast_days.to_string())
            .prompt()?;

        display.forecast_days = days
            .trim()
            .parse()
            .context("Forecast days must be a non-negative integer")?;
    }

    Ok(())
}
