//! Serialization of the rules file.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::UserConfig;
use crate::error::Result;

use super::pattern::{escape_pattern, longest_first, resolve_patterns};

/// Render the rules file content for a term set.
///
/// The header is always emitted, even for an empty set. Terms are emitted
/// longest first (see [`longest_first`]); the `patterns:` block is omitted
/// entirely for terms with no patterns.
pub fn render_rules(terms: &BTreeSet<String>, config: Option<&UserConfig>) -> String {
    let mut sorted: Vec<&str> = terms.iter().map(String::as_str).collect();
    sorted.sort_by(|a, b| longest_first(a, b));

    let mut out = String::new();
    out.push_str("version: 1\n");
    out.push_str("rules:\n");

    for term in sorted {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        out.push_str(&format!("  - expected: '{term}'\n"));

        let patterns = resolve_patterns(config, term);
        if !patterns.is_empty() {
            out.push_str("    patterns:\n");
            for pattern in &patterns {
                let escaped = escape_pattern(pattern);
                out.push_str(&format!("      - '{}'\n", escaped.trim()));
            }
        }
    }

    out
}

/// Write the rules file, replacing any previous content.
///
/// The destination is truncated up front, so a failed write can leave a
/// partial file behind. Callers decide whether that is fatal.
pub fn save_rules(
    terms: &BTreeSet<String>,
    config: Option<&UserConfig>,
    path: &Path,
) -> Result<PathBuf> {
    let content = render_rules(terms, config);

    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;

    tracing::debug!(path = %path.display(), terms = terms.len(), "Wrote rules file");
    Ok(path.to_path_buf())
}
