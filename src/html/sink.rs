//! Token sink that re-serializes HTML while typographing text runs.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::mem;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::{Attribute, QualName, ns};
use quick_xml::escape::{escape, partial_escape};

use super::policy::TextPolicy;
use crate::typography::Typography;

/// Run the html5ever tokenizer over `input`, feeding every token to `sink`.
pub(crate) fn tokenize<S: TokenSink<Handle = ()>>(input: &str, sink: S) -> Tokenizer<S> {
    let queue = BufferQueue::default();
    queue.push_back(StrTendril::from_slice(input));

    let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let _ = tokenizer.feed(&queue);
    tokenizer.end();
    tokenizer
}

/// Content model the tokenizer must switch to after a start tag.
pub(crate) fn raw_text_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "textarea" | "title" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// How a text run that is about to be typographed gets escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextEscape {
    /// Only `<` and `>`; decoded ampersands are written as they are.
    Markup,
    /// `&`, `<` and `>`.
    Full,
}

/// Re-serializing sink.
///
/// Character tokens are buffered into one run per text node and written on
/// the next non-text token: escaped, then typographed if the policy allows.
/// Text the policy holds back is always fully escaped.
pub(crate) struct Rewriter<P> {
    out: RefCell<String>,
    run: RefCell<String>,
    in_raw_text: Cell<bool>,
    policy: RefCell<P>,
    rules: &'static Typography,
    escape: TextEscape,
    keep_comments: bool,
    verbatim_raw_text: bool,
    start_tag_hook: Option<fn(&mut Tag)>,
}

impl<P: TextPolicy> Rewriter<P> {
    pub fn new(capacity: usize, policy: P, rules: &'static Typography) -> Self {
        Self {
            out: RefCell::new(String::with_capacity(capacity)),
            run: RefCell::new(String::new()),
            in_raw_text: Cell::new(false),
            policy: RefCell::new(policy),
            rules,
            escape: TextEscape::Full,
            keep_comments: false,
            verbatim_raw_text: false,
            start_tag_hook: None,
        }
    }

    pub fn escape(mut self, escape: TextEscape) -> Self {
        self.escape = escape;
        self
    }

    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Copy `script`/`style` bodies as they are instead of escaping them.
    pub fn verbatim_raw_text(mut self, verbatim: bool) -> Self {
        self.verbatim_raw_text = verbatim;
        self
    }

    /// Run `hook` on every start tag before it is written.
    pub fn on_start_tag(mut self, hook: fn(&mut Tag)) -> Self {
        self.start_tag_hook = Some(hook);
        self
    }

    pub fn finish(&self) -> String {
        self.flush();
        mem::take(&mut *self.out.borrow_mut())
    }

    fn flush(&self) {
        let run = mem::take(&mut *self.run.borrow_mut());
        if run.is_empty() {
            return;
        }
        let mut out = self.out.borrow_mut();
        if self.verbatim_raw_text && self.in_raw_text.get() {
            out.push_str(&run);
        } else if self.policy.borrow().typographs() {
            let escaped = match self.escape {
                TextEscape::Markup => escape_markup(&run),
                TextEscape::Full => partial_escape(run.as_str()),
            };
            out.push_str(&self.rules.apply(&escaped));
        } else {
            out.push_str(&partial_escape(run.as_str()));
        }
    }

    fn tag(&self, mut tag: Tag) -> TokenSinkResult<()> {
        match tag.kind {
            TagKind::StartTag => {
                if let Some(hook) = self.start_tag_hook {
                    hook(&mut tag);
                }
                write_start_tag(&mut self.out.borrow_mut(), &tag);
                if tag.self_closing {
                    return TokenSinkResult::Continue;
                }
                let name: &str = &tag.name;
                self.policy.borrow_mut().open(name);
                if let Some(kind) = raw_text_kind(name) {
                    self.in_raw_text.set(kind != RawKind::Rcdata);
                    return TokenSinkResult::RawData(kind);
                }
            }
            TagKind::EndTag => {
                let name: &str = &tag.name;
                self.in_raw_text.set(false);
                let mut out = self.out.borrow_mut();
                out.push_str("</");
                out.push_str(name);
                out.push('>');
                self.policy.borrow_mut().close(name);
            }
        }
        TokenSinkResult::Continue
    }
}

/// Set `name` on a start tag, replacing any existing value.
pub(crate) fn set_attribute(tag: &mut Tag, name: &str, value: &str) {
    for attr in tag.attrs.iter_mut() {
        if attr.name.local.as_ref() == name {
            attr.value = value.into();
            return;
        }
    }
    tag.attrs.push(Attribute {
        name: QualName::new(None, ns!(), name.into()),
        value: value.into(),
    });
}

fn escape_markup(text: &str) -> Cow<'_, str> {
    if text.contains(['<', '>']) {
        Cow::Owned(text.replace('<', "&lt;").replace('>', "&gt;"))
    } else {
        Cow::Borrowed(text)
    }
}

fn write_start_tag(out: &mut String, tag: &Tag) {
    out.push('<');
    out.push_str(&tag.name);
    for attr in &tag.attrs {
        out.push(' ');
        out.push_str(&attr.name.local);
        out.push_str("=\"");
        out.push_str(&escape(&*attr.value));
        out.push('"');
    }
    if tag.self_closing {
        out.push_str("/>");
    } else {
        out.push('>');
    }
}

impl<P: TextPolicy> TokenSink for Rewriter<P> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => self.run.borrow_mut().push_str(&text),
            Token::NullCharacterToken => {}
            Token::TagToken(tag) => {
                self.flush();
                return self.tag(tag);
            }
            Token::CommentToken(comment) => {
                self.flush();
                if self.keep_comments {
                    let mut out = self.out.borrow_mut();
                    out.push_str("<!--");
                    out.push_str(&comment);
                    out.push_str("-->");
                }
            }
            Token::DoctypeToken(_) => self.flush(),
            Token::EOFToken => self.flush(),
            Token::ParseError(e) => log::trace!("tolerated HTML parse error: {e}"),
        }
        TokenSinkResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::SkipPolicy;
    use crate::skip;

    fn rewrite(input: &str, escape: TextEscape) -> String {
        let rewriter = Rewriter::new(input.len(), SkipPolicy::new(skip::HTML), Typography::html())
            .escape(escape);
        tokenize(input, rewriter).sink.finish()
    }

    #[test]
    fn test_escape_modes() {
        assert_eq!(rewrite("<p>a &amp; b</p>", TextEscape::Markup), "<p>a & b</p>");
        assert_eq!(rewrite("<p>a &amp; b</p>", TextEscape::Full), "<p>a &amp; b</p>");
        assert_eq!(rewrite("<p>&lt;b&gt;</p>", TextEscape::Markup), "<p>&lt;b&gt;</p>");
    }

    #[test]
    fn test_held_back_text_fully_escaped() {
        assert_eq!(rewrite("<pre>a &amp; b</pre>", TextEscape::Markup), "<pre>a &amp; b</pre>");
    }

    fn add_marker(tag: &mut Tag) {
        if &*tag.name == "table" {
            set_attribute(tag, "class", "x");
        }
    }

    #[test]
    fn test_start_tag_hook_sets_attribute() {
        let rewriter = Rewriter::new(0, SkipPolicy::new(skip::HTML), Typography::html())
            .on_start_tag(add_marker);
        let html = tokenize(r#"<table class="a" border="1"></table><table>"#, rewriter)
            .sink
            .finish();
        assert_eq!(html, r#"<table class="x" border="1"></table><table class="x">"#);
    }
}
