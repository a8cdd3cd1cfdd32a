use thiserror::Error;

/// Failures on the catalog ingestion path.
///
/// None of these reach the storefront: [`crate::ingest::ingest_catalog`]
/// converts every one of them into the static fallback catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid catalog URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("redirect response ({status}) but no location header found")]
    MissingRedirectLocation { status: u16 },

    #[error("redirect location \"{location}\" is not a valid URL: {reason}")]
    InvalidRedirectLocation { location: String, reason: String },

    #[error(
        "sheet access denied (401). Make the sheet publicly accessible: Share → \"Anyone with the link\" → Viewer access"
    )]
    Unauthorized,

    #[error("sheet access forbidden (403). The sheet may be private or have restricted access")]
    Forbidden,

    #[error("sheet not found (404) at {url}. Check the sheet ID in the URL")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty CSV data received")]
    EmptyBody,

    #[error("CSV must have at least a header row and one data row (got {lines} line(s))")]
    TooFewLines { lines: usize },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
