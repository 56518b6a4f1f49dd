//! Configuration constants, validation, and the optional user config file.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Glossary page fetched when no config file overrides the URL.
pub const DEFAULT_GLOSSARY_URL: &str =
    "https://docs.aws.amazon.com/ja_jp/general/latest/gr/glos-chap.html";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Fixed name of the optional config file, resolved beside the executable.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Fixed name of the emitted rules file, resolved beside the executable.
pub const RULES_FILE_NAME: &str = "glossary_rules.yml";

/// Absolute http(s) URL with no embedded whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid regex"));

/// User-supplied configuration, loaded from a JSON file.
///
/// All fields are optional in the file; unknown fields are ignored.
/// The capitalized JSON keys are the config file's published schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Glossary page URL override.
    #[serde(rename = "URL", default)]
    pub url: String,

    /// Per-term pattern overrides.
    #[serde(rename = "Rules", default)]
    pub rules: Vec<UserRule>,
}

/// One override rule: extra patterns for a single expected term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRule {
    /// The extracted term this rule applies to (exact, case-sensitive match).
    #[serde(rename = "Expected", default)]
    pub expected: String,

    /// Literal override patterns, in declared order.
    #[serde(rename = "Patterns", default)]
    pub patterns: Vec<String>,
}

impl UserConfig {
    /// URL override, treating an empty string as unset.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// Validate that a URL is an absolute http(s) URL.
///
/// # Examples
/// ```
/// use glossary_harvester::config::validate_url;
///
/// assert!(validate_url("https://example.com/glossary.html").is_ok());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(crate::error::HarvestError::InvalidUrl(url.to_string()))
    }
}

/// Directory containing the running executable.
///
/// The config and rules files live beside the binary, not in the
/// working directory.
pub fn exec_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Default path of the config file (`config.json` beside the executable).
pub fn default_config_path() -> Result<PathBuf> {
    Ok(exec_dir()?.join(CONFIG_FILE_NAME))
}

/// Default path of the rules file (`glossary_rules.yml` beside the executable).
pub fn default_rules_path() -> Result<PathBuf> {
    Ok(exec_dir()?.join(RULES_FILE_NAME))
}

/// Load the user config from a JSON file.
///
/// Fails with `Io` when the file is missing or unreadable, or `ConfigParse`
/// when the content is not valid JSON for the schema. Callers treat any
/// failure as "no user config" and proceed with defaults.
pub fn load_config(path: &Path) -> Result<UserConfig> {
    let file = File::open(path)?;
    let config = serde_json::from_reader(file)?;
    Ok(config)
}

/// Save a user config as pretty-printed JSON.
///
/// Counterpart of [`load_config`]; not exercised by the generate flow.
pub fn save_config(path: &Path, config: &UserConfig) -> Result<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, config)?;
    file.write_all(b"\n")?;
    Ok(())
}
