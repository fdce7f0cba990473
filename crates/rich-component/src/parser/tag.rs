//! Tag content parser.
//!
//! Parses the content inside `[...]` opening tags.

use crate::error::MarkupError;
use crate::style::Style;

/// A parsed opening tag.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenTag<'a> {
    /// Tag content as written, used to match named close tags.
    pub raw: &'a str,
    /// The style the tag applies.
    pub style: Style,
}

impl<'a> OpenTag<'a> {
    /// Parse the text inside an opening tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_component::parser::OpenTag;
    /// use rich_component::TextDecoration;
    ///
    /// let tag = OpenTag::parse("bold red").unwrap();
    /// assert_eq!(tag.style.decoration(TextDecoration::BOLD), Some(true));
    /// assert!(tag.closed_by("red"));
    /// assert!(!tag.closed_by("italic"));
    /// ```
    pub fn parse(raw: &'a str) -> Result<Self, MarkupError> {
        let style = Style::parse(raw).map_err(|source| MarkupError::InvalidStyle {
            tag: raw.to_string(),
            source,
        })?;
        Ok(Self { raw, style })
    }

    /// Whether `[/name]` closes this tag: `name` must be one of the words
    /// the tag was written with, or the whole tag text.
    pub fn closed_by(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        let raw = self.raw.trim().to_lowercase();
        raw == name || raw.split_whitespace().any(|word| word == name)
    }
}
