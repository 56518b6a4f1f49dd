//! HTTP client wrapper for fetching the glossary page.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{HarvestError, Result};

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("glossary-harvester/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetch a page and return its body as text.
///
/// Non-2xx statuses are errors. A fetch failure is fatal to the run,
/// so there is no retry logic here.
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let result = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text);

    match result {
        Ok(body) => {
            tracing::debug!(url, bytes = body.len(), "Fetched glossary page");
            Ok(body)
        }
        Err(source) => Err(HarvestError::Fetch {
            url: url.to_string(),
            source,
        }),
    }
}
