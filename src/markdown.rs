//! Markdown posts.
//!
//! Newer posts are authored in CommonMark with the usual extensions. They
//! are rendered as-is, without typography; tables get the same Bootstrap
//! classes as dialect tables.

use html5ever::tokenizer::Tag;
use pulldown_cmark::{Options, Parser, html};

use crate::dialect::tables::TABLE_CLASS;
use crate::error::Converted;
use crate::html::sink::{Rewriter, set_attribute, tokenize};
use crate::html::TextPolicy;
use crate::typography::Typography;

/// Render a Markdown document into an HTML fragment.
///
/// ```
/// use typomark::markdown::to_html;
///
/// assert_eq!(to_html("# a\nb").html, "<h1>a</h1>\n<p>b</p>\n");
/// ```
pub fn to_html(input: &str) -> Converted {
    log::debug!("rendering markdown ({} bytes)", input.len());

    let options = Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(input, options);
    let mut out = String::with_capacity(input.len() * 2);
    html::push_html(&mut out, parser);

    if !out.contains("<table") {
        return Converted::ok(out);
    }
    Converted::ok(decorate_tables(&out))
}

/// Rewrite every `table` start tag, raw HTML ones included, so it carries
/// exactly the table class. Text and other tags are written back unchanged.
fn decorate_tables(html: &str) -> String {
    let rewriter = Rewriter::new(html.len() + 64, Untouched, Typography::html())
        .keep_comments(true)
        .verbatim_raw_text(true)
        .on_start_tag(table_class);
    tokenize(html, rewriter).sink.finish()
}

fn table_class(tag: &mut Tag) {
    if &*tag.name == "table" {
        set_attribute(tag, "class", TABLE_CLASS);
    }
}

/// Never typographs; Markdown output is served as rendered.
struct Untouched;

impl TextPolicy for Untouched {
    fn open(&mut self, _tag: &str) {}
    fn close(&mut self, _tag: &str) {}
    fn typographs(&self) -> bool {
        false
    }
}
