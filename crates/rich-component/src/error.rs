//! Error types for styles, markup and splitting.

use thiserror::Error;

/// Errors that can occur when parsing markup into a component tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// Unclosed tag (missing `]`).
    #[error("unclosed tag starting at position {0}")]
    UnclosedTag(usize),

    /// Empty tag content.
    #[error("empty tag at position {0}")]
    EmptyTag(usize),

    /// Invalid escape sequence.
    #[error("invalid escape sequence at position {0}")]
    InvalidEscape(usize),

    /// The tag content is not a valid style.
    #[error("invalid style in tag `{tag}`: {source}")]
    InvalidStyle {
        tag: String,
        #[source]
        source: StyleParseError,
    },
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid RGB color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),
}

/// Errors that can occur when parsing a style.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleParseError {
    /// Invalid color in style.
    #[error("invalid color in style: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// Word that is neither a decoration nor a color.
    #[error("unknown style word: {0}")]
    UnknownWord(String),

    /// `on` or `not` with nothing after it.
    #[error("`{0}` must be followed by a value")]
    DanglingKeyword(String),

    /// Empty style specification.
    #[error("empty style specification")]
    Empty,
}

/// Errors reported by a configured [`Splitter`](crate::split::Splitter).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The input tree is nested deeper than the configured limit.
    #[error("component tree is nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}
