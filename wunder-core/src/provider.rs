use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{error::FetchError, xml::XmlNode};

/// Production endpoint root for the Wunderground geolookup XML API.
pub const DEFAULT_BASE_URL: &str = "http://api.wunderground.com/auto/wui/geo";

const CURRENT_CONDITIONS_PATH: &str = "WXCurrentObXML/index.xml";
const FORECAST_PATH: &str = "ForecastXML/index.xml";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch collaborator: retrieves parsed weather documents for a location
/// query. Implementations own transport concerns (timeouts, TLS); callers
/// never retry at this layer.
#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    /// Current-conditions document for a location query.
    async fn current_conditions(&self, query: &str) -> Result<XmlNode, FetchError>;

    /// Multi-day forecast document for a location query.
    async fn forecast(&self, query: &str) -> Result<XmlNode, FetchError>;
}

/// HTTP client for the Wunderground XML endpoints.
#[derive(Debug, Clone)]
pub struct WundergroundClient {
    http: Client,
    base_url: String,
}

impl WundergroundClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate endpoint root, used by tests to point at
    /// a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_xml(&self, path: &str, query: &str) -> Result<XmlNode, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, query, "fetching weather document");

        let res = self.http.get(&url).query(&[("query", query)]).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        Ok(XmlNode::parse(&body)?)
    }
}

#[async_trait]
impl WeatherApi for WundergroundClient {
    async fn current_conditions(&self, query: &str) -> Result<XmlNode, FetchError> {
        self.fetch_xml(CURRENT_CONDITIONS_PATH, query).await
    }

    async fn forecast(&self, query: &str) -> Result<XmlNode, FetchError> {
        self.fetch_xml(FORECAST_PATH, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = WundergroundClient::with_base_url("http://localhost:8080/")
            .expect("client creation should succeed");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn default_client_uses_production_endpoint() {
        let client = WundergroundClient::new().expect("client creation should succeed");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
