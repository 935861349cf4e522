//! Unit-aware formatting of individual measurements.
//!
//! Each quantity is expressed in both unit systems and collapsed to a single
//! string according to the display configuration.

use crate::{config::DisplayConfig, xml::XmlNode};

/// Conversion rate for miles -> kilometres.
const MPH_TO_KMH: f64 = 1.609344;

const DEGREES: char = '\u{b0}';

/// A quantity expressed in both unit systems, built and consumed within one
/// render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub imperial: String,
    pub metric: String,
}

impl Measurement {
    pub fn new(imperial: impl Into<String>, metric: impl Into<String>) -> Self {
        Self { imperial: imperial.into(), metric: metric.into() }
    }

    /// Collapse to the configured unit system(s). Selecting neither system is
    /// a configuration policy meaning "show both", not an error.
    pub fn display(&self, config: &DisplayConfig) -> String {
        match (config.imperial, config.metric) {
            (true, false) => self.imperial.clone(),
            (false, true) => self.metric.clone(),
            _ => format!("{}/{}", self.imperial, self.metric),
        }
    }
}

/// Temperature read from a pair of `<field>_f` / `<field>_c` elements. The
/// provider reports both scales separately, so no conversion happens here.
pub fn temperature(doc: &XmlNode, field: &str, config: &DisplayConfig) -> String {
    let fahrenheit = doc.text_or(&format!("{field}_f"), "N/A");
    let celsius = doc.text_or(&format!("{field}_c"), "N/A");

    Measurement::new(format!("{fahrenheit}{DEGREES}F"), format!("{celsius}{DEGREES}C"))
        .display(config)
}

/// Forecast high/low temperature: `<high>`/`<low>` elements carry
/// `fahrenheit` and `celsius` children.
pub fn forecast_temperature(day: &XmlNode, bound: &str, config: &DisplayConfig) -> String {
    let (fahrenheit, celsius) = match day.find(bound) {
        Some(node) => (node.text_or("fahrenheit", "N/A"), node.text_or("celsius", "N/A")),
        None => ("N/A".to_string(), "N/A".to_string()),
    };

    Measurement::new(format!("{fahrenheit}{DEGREES}F"), format!("{celsius}{DEGREES}C"))
        .display(config)
}

/// Wind speed from `wind_mph`, converting to km/h with both sides rounded to
/// the nearest integer.
pub fn wind_speed(doc: &XmlNode, config: &DisplayConfig) -> String {
    let mph: f64 = doc.text_or("wind_mph", "0").parse().unwrap_or(0.0);

    let imperial = format!("{}mph", mph.round() as i64);
    let metric = format!("{}km/h", (mph * MPH_TO_KMH).round() as i64);

    Measurement::new(imperial, metric).display(config)
}

/// Pressure: `pressure_mb` divided by 10 turns hPa into kPa (one decimal);
/// `pressure_in` is passed through as the provider gives it.
pub fn pressure(doc: &XmlNode, config: &DisplayConfig) -> String {
    let mb: f64 = doc.text_or("pressure_mb", "0").parse().unwrap_or(0.0);

    let imperial = format!("{}in", doc.text_or("pressure_in", "0"));
    let metric = format!("{:.1}kPa", mb / 10.0);

    Measurement::new(imperial, metric).display(config)
}
