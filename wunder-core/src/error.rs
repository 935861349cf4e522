use thiserror::Error;

/// Failure while building a document tree from an XML payload.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("malformed XML: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("document contains no root element")]
    NoRoot,
}

/// Failure while fetching a weather document from the provider.
///
/// These are transport-level problems; a well-formed document that merely
/// lacks some fields is never a `FetchError` (missing fields degrade to
/// placeholder text during rendering instead).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid XML in response: {0}")]
    Xml(#[from] XmlError),
}

/// Errors surfaced to the user by a weather query.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No location argument and no remembered location for the user. Raised
    /// before any network activity.
    #[error("no location given and no previous location on record")]
    MissingLocation,

    /// Location resolution exhausted the shortform fallbacks.
    #[error("No such location could be found.")]
    LocationNotFound,

    /// Transport or parse failure, propagated unmodified. Retries, if any,
    /// belong to the transport layer.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
