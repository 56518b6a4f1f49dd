//! Main harvest flow tying fetcher, HTML extraction, and tokenization together.

use std::collections::BTreeSet;

use crate::config::validate_url;
use crate::error::Result;
use crate::extract::collect_terms;
use crate::html::definition_terms;
use crate::http::{create_client, fetch_page};

/// Fetch a glossary page and extract its candidate term set.
pub fn harvest_terms(url: &str) -> Result<BTreeSet<String>> {
    validate_url(url)?;

    let client = create_client()?;
    let html = fetch_page(&client, url)?;

    let terms = terms_from_html(&html);
    tracing::info!(url, terms = terms.len(), "Harvested glossary terms");
    Ok(terms)
}

/// Extract the candidate term set from raw glossary HTML.
///
/// Network-free inner step of [`harvest_terms`], usable with fixture
/// documents in tests.
#[must_use]
pub fn terms_from_html(html: &str) -> BTreeSet<String> {
    let mut terms = BTreeSet::new();
    for text in definition_terms(html) {
        collect_terms(&text, &mut terms);
    }
    terms
}
