//! Definition-term extraction from raw HTML.
//!
//! The only structural dependency on the glossary page is the presence of
//! `dt` elements whose text content is the terms. A streaming tokenizer is
//! enough for that: collect character data between a `<dt>` start tag and
//! the matching end tag. Inline markup inside a `dt` contributes its text;
//! character references are decoded by the tokenizer.

use std::cell::{Cell, RefCell};

use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use tendril::StrTendril;

/// Token sink accumulating the text content of every `dt` element.
#[derive(Debug, Default)]
struct DefinitionTermSink {
    in_term: Cell<bool>,
    buffer: RefCell<String>,
    terms: RefCell<Vec<String>>,
}

impl TokenSink for DefinitionTermSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag {
                kind,
                name,
                self_closing,
                ..
            }) if name.as_ref() == "dt" => match kind {
                // A new dt start tag also closes an unclosed predecessor
                TagKind::StartTag => {
                    self.flush();
                    if !self_closing {
                        self.in_term.set(true);
                    }
                }
                TagKind::EndTag => self.flush(),
            },
            Token::CharacterTokens(text) => {
                if self.in_term.get() {
                    self.buffer.borrow_mut().push_str(&text);
                }
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl DefinitionTermSink {
    /// Close the current term, if any, and record its trimmed text.
    fn flush(&self) {
        if !self.in_term.replace(false) {
            return;
        }
        let text = std::mem::take(&mut *self.buffer.borrow_mut());
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.terms.borrow_mut().push(trimmed.to_string());
        }
    }
}

/// Return the text content of every `dt` element in the document,
/// trimmed, in document order.
pub fn definition_terms(html: &str) -> Vec<String> {
    let tokenizer = Tokenizer::new(DefinitionTermSink::default(), TokenizerOpts::default());
    let queue = BufferQueue::default();
    queue.push_back(StrTendril::from(html));

    let _ = tokenizer.feed(&queue);
    tokenizer.end();

    let sink = tokenizer.sink;
    sink.flush(); // Unclosed trailing dt
    sink.terms.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_definition_terms_basic() {
        let html = r#"
            <dl>
              <dt>Access Key</dt>
              <dd>Credentials.</dd>
              <dt>Content Delivery Network (CDN)</dt>
              <dd>Edge caching.</dd>
            </dl>
        "#;
        assert_eq!(
            definition_terms(html),
            vec![
                "Access Key".to_string(),
                "Content Delivery Network (CDN)".to_string()
            ]
        );
    }

    #[test]
    fn test_definition_terms_inline_markup_and_entities() {
        let html = "<dt><a href=\"#s3\">Amazon <b>S3</b></a></dt><dt>A&amp;B testing</dt>";
        assert_eq!(
            definition_terms(html),
            vec!["Amazon S3".to_string(), "A&B testing".to_string()]
        );
    }

    #[test]
    fn test_definition_terms_unclosed_dt() {
        // dd implicitly ends the dt in real parsers; the tokenizer doesn't,
        // so an unclosed dt runs to the next dt or end of input.
        let html = "<dl><dt>First<dt>Second</dt></dl>";
        let terms = definition_terms(html);
        assert_eq!(terms[0], "First");
        assert_eq!(terms[1], "Second");
    }

    #[test]
    fn test_definition_terms_ignores_other_elements() {
        let html = "<h1>Glossary</h1><p>dt mentioned in prose</p><dd>orphan</dd>";
        assert!(definition_terms(html).is_empty());
    }

    #[test]
    fn test_definition_terms_whitespace_only_dropped() {
        let html = "<dt>   </dt><dt>Region</dt>";
        assert_eq!(definition_terms(html), vec!["Region".to_string()]);
    }
}
