//! Query orchestration: location fallback, resolution, fetching and the
//! final reply assembly.

use crate::{
    config::{DisplayConfig, LocationStore},
    error::WeatherError,
    provider::WeatherApi,
    render, resolve,
    shortforms::Shortforms,
};

/// One weather lookup against injected collaborators. Holds no state of its
/// own; every document and intermediate string is local to a single
/// [`WeatherQuery::run`] call, so instances are freely shared across tasks.
#[derive(Clone, Copy)]
pub struct WeatherQuery<'a> {
    api: &'a dyn WeatherApi,
    shortforms: &'a dyn Shortforms,
}

impl<'a> WeatherQuery<'a> {
    pub fn new(api: &'a dyn WeatherApi, shortforms: &'a dyn Shortforms) -> Self {
        Self { api, shortforms }
    }

    /// Run one query and return the full reply line.
    ///
    /// The effective location is the explicit argument, else the user's
    /// remembered location; neither present is an argument error raised
    /// before any network activity. The effective location is stored before
    /// the first fetch, so a failed lookup can still be repeated without
    /// retyping it.
    pub async fn run(
        &self,
        user: &str,
        location: Option<&str>,
        store: &mut dyn LocationStore,
        config: &DisplayConfig,
    ) -> Result<String, WeatherError> {
        let location = match location.map(str::trim).filter(|l| !l.is_empty()) {
            Some(given) => given.to_string(),
            None => store.last_location(user).ok_or(WeatherError::MissingLocation)?,
        };
        store.set_last_location(user, &location);

        let resolved = resolve::resolve(&location, self.shortforms, self.api).await?;
        let forecast_doc = self.api.forecast(&resolved.query).await?;

        let mut output = vec![format!(
            "Weather for {}",
            resolved.conditions.text_or("full", "Unknown Location")
        )];
        output.push(render::current_conditions(&resolved.conditions, config));
        output.extend(render::forecast(&forecast_doc, config));

        Ok(output.join(" | "))
    }
}
