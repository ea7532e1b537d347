//! Extraction Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction, with display/source derives from `derive_more`.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong
/// internally. Any of them means the record being extracted should be
/// skipped; sibling records in the same batch are unaffected.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The page does not have the structure this extractor is tuned to.
    #[display("unrecognized page structure")]
    InvalidDocument,
    /// A labeled field could not be found in the document.
    ///
    /// Only the official page family raises this; the legacy family treats
    /// a lookup miss as an empty value instead.
    #[display("missing labeled field: {_0}")]
    MissingField(#[error(not(source))] &'static str),
    /// A date or time string matched none of the accepted patterns, or a
    /// matched component was out of range.
    #[display("unparseable {field} text: {value}")]
    InvalidFormat {
        /// Which kind of value failed to parse ("date", "time", ...).
        field: &'static str,
        /// The offending input text.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Extraction is a pure function of the HTML; retrying cannot help.
        false
    }
}
