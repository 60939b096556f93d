//! # typomark
//!
//! Renders archived blog content into HTML fragments with correct Russian
//! typography: em dashes with non-breaking spaces, ellipses, minus signs and
//! fractions, never touching code, preformatted text, links or scripts.
//!
//! ## Entry points
//!
//! Stored content carries a format flag; the caller picks the entry point:
//!
//! - [`dialect::convert`] for the legacy semi-XML dialect,
//! - [`html::retokenize`] for HTML that only needs a typographic pass,
//! - [`markdown::to_html`] for Markdown posts.
//!
//! [`render`] dispatches on a [`ContentFormat`] and always yields usable HTML.
//!
//! ```
//! use typomark::{ContentFormat, render};
//!
//! let rendered = render("<div1><head>Итоги</head><p>Вот и всё...</p></div1>", ContentFormat::Dialect);
//! assert_eq!(rendered.html, "<h2>Итоги</h2><p>Вот и всё&hellip;</p>");
//! ```
//!
//! Converters keep no state between calls, so they can be used from any
//! number of threads at once.

pub mod dialect;
pub mod error;
pub mod html;
pub mod markdown;
pub mod render;
pub mod skip;
pub mod typography;

pub use error::{Converted, Error, Result};
pub use render::{ContentFormat, Rendered, render};
