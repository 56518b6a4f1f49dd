//! Pattern resolution and regex-literal escaping.

use std::cmp::Ordering;

use crate::config::UserConfig;

/// Ordering used everywhere in the rules file: descending codepoint length,
/// ties broken by ascending lexicographic order for reproducible output.
pub fn longest_first(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

/// Resolve the override patterns for one term.
///
/// A term containing a space gets one auto-generated pattern with the
/// spaces removed, matching camel-joined or concatenated forms. Every
/// config rule whose `Expected` equals the trimmed term (case-sensitive)
/// then contributes its non-empty trimmed patterns in declared order,
/// duplicates preserved. The result is sorted with [`longest_first`].
pub fn resolve_patterns(config: Option<&UserConfig>, term: &str) -> Vec<String> {
    let term = term.trim();
    let mut patterns: Vec<String> = Vec::new();

    if term.contains(' ') {
        patterns.push(term.replace(' ', ""));
    }

    if let Some(config) = config {
        for rule in config.rules.iter().filter(|r| r.expected == term) {
            patterns.extend(
                rule.patterns
                    .iter()
                    .map(|p| p.trim())
                    .filter(|p| !p.is_empty())
                    .map(String::from),
            );
        }
    }

    patterns.sort_by(|a, b| longest_first(a, b));
    patterns
}

/// Backslash-escape regex metacharacters so the pattern can be embedded
/// as a literal match inside a regex-based rules consumer.
pub fn escape_pattern(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '\\' | '*' | '+' | '.' | '?' | '{' | '}' | '(' | ')' | '[' | ']' | '|' | '^' | '-'
            | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserRule;
    use pretty_assertions::assert_eq;

    fn config_with(rules: Vec<UserRule>) -> UserConfig {
        UserConfig {
            url: String::new(),
            rules,
        }
    }

    #[test]
    fn test_auto_pattern_for_spaced_term() {
        assert_eq!(resolve_patterns(None, "Access Key"), vec!["AccessKey"]);
    }

    #[test]
    fn test_no_auto_pattern_for_single_word() {
        assert!(resolve_patterns(None, "Lambda").is_empty());
    }

    #[test]
    fn test_user_rules_append_after_auto_pattern() {
        let config = config_with(vec![UserRule {
            expected: "Access Key".to_string(),
            patterns: vec!["ak".to_string(), " access-key ".to_string(), "".to_string()],
        }]);

        // Sorted longest first: "access-key" (10), "AccessKey" (9), "ak" (2)
        assert_eq!(
            resolve_patterns(Some(&config), "Access Key"),
            vec!["access-key", "AccessKey", "ak"]
        );
    }

    #[test]
    fn test_multiple_matching_rules_all_contribute() {
        let config = config_with(vec![
            UserRule {
                expected: "CDN".to_string(),
                patterns: vec!["cdn".to_string()],
            },
            UserRule {
                expected: "CDN".to_string(),
                patterns: vec!["cdn".to_string(), "CloudFront".to_string()],
            },
        ]);

        // Duplicates preserved, then sorted longest first
        assert_eq!(
            resolve_patterns(Some(&config), "CDN"),
            vec!["CloudFront", "cdn", "cdn"]
        );
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let config = config_with(vec![UserRule {
            expected: "cdn".to_string(),
            patterns: vec!["x1".to_string()],
        }]);
        assert!(resolve_patterns(Some(&config), "CDN").is_empty());
    }

    #[test]
    fn test_term_trimmed_before_matching() {
        let config = config_with(vec![UserRule {
            expected: "CDN".to_string(),
            patterns: vec!["cdn".to_string()],
        }]);
        assert_eq!(resolve_patterns(Some(&config), "  CDN  "), vec!["cdn"]);
    }

    #[test]
    fn test_escape_substitution_table() {
        assert_eq!(escape_pattern("a.b*c"), r"a\.b\*c");
        assert_eq!(escape_pattern(r"a\b"), r"a\\b");
        assert_eq!(escape_pattern("(a)[b]{c}"), r"\(a\)\[b\]\{c\}");
        assert_eq!(escape_pattern("x+y?z|w^v-u$t"), r"x\+y\?z\|w\^v\-u\$t");
        assert_eq!(escape_pattern("plain"), "plain");
    }

    #[test]
    fn test_escape_not_idempotent() {
        // Escaping an already-escaped string double-escapes it
        let once = escape_pattern("a.b");
        let twice = escape_pattern(&once);
        assert_eq!(once, r"a\.b");
        assert_eq!(twice, r"a\\\.b");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_longest_first_ordering() {
        let mut items = vec!["AB", "A", "ABC", "AA"];
        items.sort_by(|a, b| longest_first(a, b));
        assert_eq!(items, vec!["ABC", "AA", "AB", "A"]);
    }

    #[test]
    fn test_longest_first_counts_codepoints_not_bytes() {
        // "リージョン" is 5 codepoints / 15 bytes; "Region" is 6 codepoints
        let mut items = vec!["リージョン", "Region"];
        items.sort_by(|a, b| longest_first(a, b));
        assert_eq!(items, vec!["Region", "リージョン"]);
    }
}
