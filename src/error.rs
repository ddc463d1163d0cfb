//! Parse and cache errors
//!
//! Every parse failure is fatal: the parser stops at the first violation and
//! reports what went wrong together with the byte offset where it noticed.

use thiserror::Error;

/// What kind of grammar violation stopped the parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Document does not start with `<` after leading whitespace
    #[error("expected an element")]
    ExpectedElement,
    /// Input ended inside a tag, attribute, or closing tag
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("empty tag name")]
    EmptyTagName,
    #[error("empty attribute name")]
    EmptyAttributeName,
    /// Missing `=`, missing quote, or a quote other than `"`
    #[error("unterminated attribute")]
    UnterminatedAttribute,
    /// Outermost element is not the configured root
    #[error("invalid root element")]
    InvalidRoot,
    #[error("mismatched closing tag")]
    MismatchedClosingTag,
    /// Element content ran to end of input without a closing tag
    #[error("unterminated element")]
    UnterminatedElement,
    #[error("trailing content after root element")]
    TrailingContent,
    /// A `/` inside a tag was not followed by `>`
    #[error("expected `>`")]
    ExpectedTagEnd,
    #[error("element nesting too deep")]
    DepthLimitExceeded,
}

impl ErrorKind {
    /// Stable snake_case identifier (used for atoms in the NIF bindings)
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ExpectedElement => "expected_element",
            ErrorKind::UnexpectedEof => "unexpected_eof",
            ErrorKind::EmptyTagName => "empty_tag_name",
            ErrorKind::EmptyAttributeName => "empty_attribute_name",
            ErrorKind::UnterminatedAttribute => "unterminated_attribute",
            ErrorKind::InvalidRoot => "invalid_root",
            ErrorKind::MismatchedClosingTag => "mismatched_closing_tag",
            ErrorKind::UnterminatedElement => "unterminated_element",
            ErrorKind::TrailingContent => "trailing_content",
            ErrorKind::ExpectedTagEnd => "expected_tag_end",
            ErrorKind::DepthLimitExceeded => "depth_limit_exceeded",
        }
    }
}

/// A failed parse: the kind of violation and the byte offset it was found at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        ParseError { kind, position }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// Errors raised when building a recency cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("cache item limit must be positive")]
    ZeroCapacity,
}
