//! Word extraction: tokenize glossary text into candidate dictionary terms.

use std::collections::BTreeSet;

/// Number of Unicode scalar values in a string.
fn codepoints(s: &str) -> usize {
    s.chars().count()
}

/// Extract candidate terms from one piece of glossary text into `terms`.
///
/// `(` and `)` are treated purely as textual delimiters, not balanced
/// pairs, so malformed nesting degrades into extra segments. Each fragment
/// is inserted verbatim (it may be a multi-word phrase) and additionally
/// split on spaces into individual words. Fragments and words with one
/// codepoint or fewer are discarded.
///
/// `"Content Delivery Network (CDN)"` yields `"Content Delivery Network"`,
/// `"Content"`, `"Delivery"`, `"Network"`, and `"CDN"`.
pub fn collect_terms(text: &str, terms: &mut BTreeSet<String>) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    for segment in text.split('(') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        for fragment in segment.split(')') {
            let fragment = fragment.trim();
            if codepoints(fragment) <= 1 {
                continue;
            }
            terms.insert(fragment.to_string());

            for word in fragment.split(' ') {
                let word = word.trim();
                if codepoints(word) <= 1 {
                    continue;
                }
                terms.insert(word.to_string());
            }
        }
    }
}
