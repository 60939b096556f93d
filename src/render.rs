//! Caller-facing dispatch on the stored content format.

use std::fmt;
use std::str::FromStr;

use quick_xml::escape::partial_escape;

use crate::error::{Converted, Error};
use crate::{dialect, html, markdown};

/// Prolog that legacy dialect documents were stored with.
pub const LEGACY_PROLOG: &str = "<?xml version=\"1.0\"?>";

/// Persisted per-document content format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFormat {
    /// Legacy semi-XML dialect.
    Dialect,
    /// Previously rendered HTML.
    Html,
    /// CommonMark.
    Markdown,
}

impl ContentFormat {
    /// Guess the format of a stored post the way the blog always has:
    /// the markdown flag wins, then the legacy XML prolog, then HTML.
    pub fn detect_legacy(content: &str, markdown: bool) -> Self {
        if markdown {
            ContentFormat::Markdown
        } else if content.starts_with(LEGACY_PROLOG) {
            ContentFormat::Dialect
        } else {
            ContentFormat::Html
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentFormat::Dialect => "dialect",
            ContentFormat::Html => "html",
            ContentFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dialect" | "xml" | "legacy" => Ok(ContentFormat::Dialect),
            "html" => Ok(ContentFormat::Html),
            "markdown" | "md" => Ok(ContentFormat::Markdown),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// HTML ready for embedding into a page, plus whatever went wrong on the way.
#[derive(Debug)]
pub struct Rendered {
    pub html: String,
    pub format: ContentFormat,
    pub error: Option<Error>,
}

/// Render stored content with the entry point selected by `format`.
///
/// Never fails: when conversion reports an error the partial output is kept,
/// and if nothing was produced the escaped source is served instead.
pub fn render(content: &str, format: ContentFormat) -> Rendered {
    let Converted { html, error } = match format {
        ContentFormat::Dialect => dialect::convert(content),
        ContentFormat::Html => html::retokenize(content),
        ContentFormat::Markdown => markdown::to_html(content),
    };

    let Some(error) = error else {
        return Rendered {
            html,
            format,
            error: None,
        };
    };

    log::warn!("rendering {format} content failed: {error}");
    let html = if html.trim().is_empty() {
        partial_escape(content).into_owned()
    } else {
        html
    };
    Rendered {
        html,
        format,
        error: Some(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_legacy() {
        assert_eq!(
            ContentFormat::detect_legacy("<?xml version=\"1.0\"?><p>a</p>", false),
            ContentFormat::Dialect
        );
        assert_eq!(
            ContentFormat::detect_legacy("<?xml version=\"1.0\"?><p>a</p>", true),
            ContentFormat::Markdown
        );
        assert_eq!(ContentFormat::detect_legacy("<p>a</p>", false), ContentFormat::Html);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("dialect".parse::<ContentFormat>().unwrap(), ContentFormat::Dialect);
        assert_eq!("XML".parse::<ContentFormat>().unwrap(), ContentFormat::Dialect);
        assert_eq!("md".parse::<ContentFormat>().unwrap(), ContentFormat::Markdown);
        assert_eq!("html".parse::<ContentFormat>().unwrap(), ContentFormat::Html);
        assert!(matches!(
            "rtf".parse::<ContentFormat>(),
            Err(Error::UnknownFormat(name)) if name == "rtf"
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for format in [ContentFormat::Dialect, ContentFormat::Html, ContentFormat::Markdown] {
            assert_eq!(format.to_string().parse::<ContentFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_render_dispatch() {
        assert_eq!(render("<p>a - b</p>", ContentFormat::Dialect).html, "<p>a&nbsp;&mdash; b</p>");
        assert_eq!(render("<p>1-2</p>", ContentFormat::Html).html, "<p>1&minus;2</p>");
        assert_eq!(render("a - b", ContentFormat::Markdown).html, "<p>a - b</p>\n");
    }

    #[test]
    fn test_render_keeps_partial_output() {
        let rendered = render("<p>a</p><p>b</q>", ContentFormat::Dialect);
        assert!(rendered.error.is_some());
        assert_eq!(rendered.html, "<p>a</p><p>b");
    }

    #[test]
    fn test_render_falls_back_to_escaped_source() {
        let rendered = render("</p>", ContentFormat::Dialect);
        assert!(rendered.error.is_some());
        assert_eq!(rendered.html, "&lt;/p&gt;");
    }
}
