//! Location resolution with shortform fallback.
//!
//! The provider never answers "not found": an ambiguous or unmatched query
//! comes back as a well-formed document whose `observation_location/city`
//! element is empty. Resolution therefore fetches, checks the city field,
//! and retries once with the conflict-resolved shortform before giving up.

use tracing::debug;

use crate::{error::WeatherError, provider::WeatherApi, shortforms::Shortforms, xml::XmlNode};

/// A location query the provider accepted, together with the
/// current-conditions document that confirmed it. The document is reused as
/// the conditions result so the confirming fetch is not repeated.
#[derive(Debug)]
pub struct ResolvedLocation {
    pub query: String,
    pub conditions: XmlNode,
}

fn has_city(conditions: &XmlNode) -> bool {
    conditions
        .find("observation_location")
        .and_then(|loc| loc.find("city"))
        .is_some_and(|city| !city.text.is_empty())
}

/// Resolve a raw location string into a query the provider accepts.
///
/// Performs at most two current-conditions fetches: one for the expanded
/// location, and one for the conflict-resolved alternate when the first
/// came back without a city.
pub async fn resolve(
    raw_location: &str,
    shortforms: &dyn Shortforms,
    api: &dyn WeatherApi,
) -> Result<ResolvedLocation, WeatherError> {
    let candidate = shortforms.expand(raw_location);
    let conditions = api.current_conditions(&candidate).await?;

    if has_city(&conditions) {
        return Ok(ResolvedLocation { query: candidate, conditions });
    }

    // No city: the shortform may have collided with a state code and been
    // left untouched on the first pass.
    let Some(alternate) = shortforms.resolve_conflict(raw_location) else {
        return Err(WeatherError::LocationNotFound);
    };

    debug!(%alternate, "retrying with conflict-resolved shortform");
    let conditions = api.current_conditions(&alternate).await?;

    if has_city(&conditions) {
        Ok(ResolvedLocation { query: alternate, conditions })
    } else {
        Err(WeatherError::LocationNotFound)
    }
}
