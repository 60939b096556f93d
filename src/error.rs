//! Error types for typomark conversions.

use thiserror::Error;

/// Errors that can occur while converting stored content to HTML.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The legacy dialect token stream could not be decoded.
    #[error("XML decoding error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// An output token could not be serialized.
    #[error("HTML encoding error: {0}")]
    Encode(String),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Unknown content format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Output of a single conversion call.
///
/// Conversions never discard what they already produced: when the input is
/// malformed, `html` holds everything rendered up to the failing token and
/// `error` says why rendering stopped.
#[derive(Debug)]
pub struct Converted {
    pub html: String,
    pub error: Option<Error>,
}

impl Converted {
    pub fn ok(html: String) -> Self {
        Self { html, error: None }
    }

    pub fn partial(html: String, error: Error) -> Self {
        Self {
            html,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Strict view of the conversion: the partial output is dropped on error.
    pub fn into_result(self) -> Result<String> {
        match self.error {
            None => Ok(self.html),
            Some(e) => Err(e),
        }
    }
}
