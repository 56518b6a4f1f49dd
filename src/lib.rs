//! Glossary Harvester - generate a spellcheck rules file from a glossary page.
//!
//! This crate fetches a glossary web page, extracts term definitions from its
//! `dt` elements, tokenizes them into candidate dictionary words, merges them
//! with user-supplied pattern overrides, and emits a sorted rules file.
//!
//! # Example
//!
//! ```
//! use glossary_harvester::harvest::terms_from_html;
//! use glossary_harvester::rules::render_rules;
//!
//! let terms = terms_from_html("<dt>Access Key</dt>");
//! let rules = render_rules(&terms, None);
//! assert!(rules.starts_with("version: 1\n"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, URL validation, and the optional JSON user config
//! - [`error`]: Error types and Result alias
//! - [`http`]: Blocking HTTP client for fetching the page
//! - [`html`]: `dt` text extraction from raw HTML
//! - [`extract`]: Word extraction and tokenization
//! - [`rules`]: Pattern resolution and rules file serialization
//! - [`harvest`]: Main harvest flow
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod harvest;
pub mod html;
pub mod http;
pub mod rules;

// Re-export main functions
pub use harvest::{harvest_terms, terms_from_html};

// Re-export commonly used items
pub use config::{validate_url, UserConfig, UserRule};
pub use error::{HarvestError, Result};
pub use rules::{render_rules, save_rules};
