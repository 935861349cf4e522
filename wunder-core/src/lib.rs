//! Core library for the `wunder` weather reporter.
//!
//! This crate defines:
//! - An owned XML document model with default-on-absence field lookup
//! - Location resolution with shortform conflict fallback
//! - Unit-aware formatting and rendering of conditions and forecasts
//! - Configuration & per-user last-location storage
//!
//! It is used by `wunder-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod provider;
pub mod query;
pub mod render;
pub mod resolve;
pub mod shortforms;
pub mod xml;

pub use config::{Config, DisplayConfig, LocationStore};
pub use error::{FetchError, WeatherError, XmlError};
pub use format::Measurement;
pub use provider::{WeatherApi, WundergroundClient};
pub use query::WeatherQuery;
pub use resolve::ResolvedLocation;
pub use shortforms::{Shortforms, StateCountryShortforms};
pub use xml::XmlNode;
