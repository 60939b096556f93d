//! Typographic touch-up of stored HTML.
//!
//! Content that is already HTML is run through the html5ever tokenizer and
//! written back token by token. Tags keep their names and attributes,
//! though quoting and whitespace inside them are normalized; self-closing
//! tags stay self-closing. Inside the skip zone text is escaped and left
//! alone; script and style bodies are part of it. Outside, text is
//! typographed with [`Typography::html`] and written with decoded
//! ampersands, only `<` and `>` being escaped. Comments and doctypes are
//! dropped.

mod policy;
pub(crate) mod sink;
mod text;

pub use policy::{INLINE_ALLOWED, InlinePolicy, SkipPolicy, TextPolicy};
pub use text::to_text;

use crate::error::Converted;
use crate::skip;
use crate::typography::Typography;

use sink::{Rewriter, TextEscape, tokenize};

/// Re-tokenize an HTML fragment, typographing text outside skip zones.
///
/// HTML tokenization never fails, so the result carries no error.
///
/// ```
/// use typomark::html::retokenize;
///
/// assert_eq!(retokenize("<p>123-456</p>").html, "<p>123&minus;456</p>");
/// assert_eq!(retokenize("<pre>s - s</pre>").html, "<pre>s - s</pre>");
/// ```
pub fn retokenize(input: &str) -> Converted {
    log::debug!("re-tokenizing HTML fragment ({} bytes)", input.len());
    let rewriter = Rewriter::new(
        input.len() + input.len() / 8,
        SkipPolicy::new(skip::HTML),
        Typography::html(),
    )
    .escape(TextEscape::Markup);
    Converted::ok(tokenize(input, rewriter).sink.finish())
}

/// Typograph a short fragment such as a title or a teaser.
///
/// Only text whose innermost element is in [`INLINE_ALLOWED`] is
/// typographed; text outside any element is left alone. Quotes are
/// replaced with guillemets. Script and style bodies are copied as they are.
///
/// ```
/// use typomark::html::typograph_inline;
///
/// assert_eq!(
///     typograph_inline("<p>test \"a - b\"cd</p>").html,
///     "<p>test «a&nbsp;&mdash; b»cd</p>"
/// );
/// ```
pub fn typograph_inline(input: &str) -> Converted {
    let rewriter = Rewriter::new(
        input.len() + input.len() / 8,
        InlinePolicy::default(),
        Typography::inline(),
    )
    .keep_comments(true)
    .verbatim_raw_text(true);
    Converted::ok(tokenize(input, rewriter).sink.finish())
}
