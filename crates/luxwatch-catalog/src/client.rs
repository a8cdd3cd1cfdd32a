//! HTTP client for the published spreadsheet CSV export.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, LOCATION};
use reqwest::{redirect, Client, StatusCode, Url};

use crate::error::CatalogError;

const CSV_ACCEPT: &str = "text/csv,text/plain,application/csv,*/*";

/// Fetches the raw CSV text of a sheet export.
///
/// Redirects are never followed by the transport. A single 307/308 hop is
/// followed by hand, which is what the sheet host uses when it moves an
/// export to its content domain.
pub struct SheetsClient {
    pub(crate) client: Client,
}

impl SheetsClient {
    /// Creates a `SheetsClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(browser_headers())
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Downloads the CSV body at `url`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidUrl`] if `url` does not parse.
    /// - [`CatalogError::MissingRedirectLocation`] for a 307/308 without `Location`.
    /// - [`CatalogError::InvalidRedirectLocation`] if `Location` cannot be resolved.
    /// - [`CatalogError::Unauthorized`], [`CatalogError::Forbidden`],
    ///   [`CatalogError::NotFound`], [`CatalogError::UnexpectedStatus`] for
    ///   non-2xx responses after the redirect hop.
    /// - [`CatalogError::Http`] on network or body read failure.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, CatalogError> {
        let request_url = Url::parse(url).map_err(|e| CatalogError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url = %request_url, "fetching catalog CSV");
        let mut response = self.client.get(request_url.clone()).send().await?;
        let mut final_url = request_url;

        if is_followed_redirect(response.status()) {
            let status = response.status().as_u16();
            let next = resolve_location(&final_url, response.headers(), status)?;
            tracing::info!(status, location = %next, "following sheet redirect");
            response = self.client.get(next.clone()).send().await?;
            final_url = next;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, final_url.as_str()));
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "received catalog CSV");
        Ok(body)
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static(CSV_ACCEPT));
    headers.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(
        reqwest::header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    );
    headers.insert(reqwest::header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

fn is_followed_redirect(status: StatusCode) -> bool {
    status == StatusCode::TEMPORARY_REDIRECT || status == StatusCode::PERMANENT_REDIRECT
}

/// Resolves a `Location` header against the URL that produced it.
pub(crate) fn resolve_location(
    base: &Url,
    headers: &HeaderMap,
    status: u16,
) -> Result<Url, CatalogError> {
    let location = headers
        .get(LOCATION)
        .ok_or(CatalogError::MissingRedirectLocation { status })?;
    let location = location
        .to_str()
        .map_err(|e| CatalogError::InvalidRedirectLocation {
            location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
            reason: e.to_string(),
        })?;
    base.join(location)
        .map_err(|e| CatalogError::InvalidRedirectLocation {
            location: location.to_owned(),
            reason: e.to_string(),
        })
}

/// Maps a non-2xx status to the error the storefront advisory shows.
pub(crate) fn classify_status(status: StatusCode, url: &str) -> CatalogError {
    match status {
        StatusCode::UNAUTHORIZED => CatalogError::Unauthorized,
        StatusCode::FORBIDDEN => CatalogError::Forbidden,
        StatusCode::NOT_FOUND => CatalogError::NotFound {
            url: url.to_owned(),
        },
        other => CatalogError::UnexpectedStatus {
            status: other.as_u16(),
            url: url.to_owned(),
        },
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
