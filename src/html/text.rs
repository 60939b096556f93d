//! Plain text extraction for descriptions and search snippets.

use std::cell::{Cell, RefCell};
use std::mem;

use html5ever::tokenizer::{TagKind, Token, TokenSink, TokenSinkResult};

use super::policy::is_void;
use super::sink::{raw_text_kind, tokenize};

/// Collect the visible text of an HTML fragment.
///
/// Each text node inside an element is trimmed; empty ones are dropped and
/// the rest joined by a single space. Text outside any element is ignored.
/// Entities are decoded; `script` and `style` are skipped.
///
/// ```
/// assert_eq!(typomark::html::to_text("<h1>a</h1>\n<p>b &amp; c</p>\n"), "a b & c");
/// ```
pub fn to_text(input: &str) -> String {
    let tokenizer = tokenize(input, TextCollector::default());
    tokenizer.sink.finish()
}

#[derive(Default)]
struct TextCollector {
    chunks: RefCell<Vec<String>>,
    current: RefCell<String>,
    hidden: Cell<bool>,
    depth: Cell<usize>,
}

impl TextCollector {
    fn push_current(&self) {
        let current = mem::take(&mut *self.current.borrow_mut());
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            self.chunks.borrow_mut().push(trimmed.to_string());
        }
    }

    fn finish(&self) -> String {
        self.push_current();
        self.chunks.borrow().join(" ")
    }
}

impl TokenSink for TextCollector {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => {
                if self.depth.get() > 0 && !self.hidden.get() {
                    self.current.borrow_mut().push_str(&text);
                }
            }
            Token::TagToken(tag) => {
                self.push_current();
                let name: &str = &tag.name;
                let hides = matches!(name, "script" | "style");
                match tag.kind {
                    TagKind::StartTag if !tag.self_closing => {
                        if !is_void(name) {
                            self.depth.set(self.depth.get() + 1);
                        }
                        if hides {
                            self.hidden.set(true);
                        }
                        if let Some(kind) = raw_text_kind(name) {
                            return TokenSinkResult::RawData(kind);
                        }
                    }
                    TagKind::EndTag => {
                        self.depth.set(self.depth.get().saturating_sub(1));
                        if hides {
                            self.hidden.set(false);
                        }
                    }
                    _ => {}
                }
            }
            _ => self.push_current(),
        }
        TokenSinkResult::Continue
    }
}
