//! Styled rich-text component trees.
//!
//! A document is a tree of [`Component`]s. Each node carries its own
//! [`Style`] and ordered children; literal nodes also carry text. Styles
//! are inherited: an attribute a node leaves unset is taken from its
//! nearest ancestor that sets it.
//!
//! # Splitting
//!
//! [`Component::split`] cuts a document on a [`Delimiter`] (a string, a
//! `char` or a [`regex::Regex`]) and returns the pieces between matches as
//! sibling trees. Every fragment renders with exactly the style it had in
//! the original tree, and empty pieces between consecutive delimiters are
//! kept.
//!
//! ```
//! use rich_component::Component;
//!
//! let doc = Component::from_markup("[green]A line[/]\nand another").unwrap();
//! let lines = doc.split("\n");
//!
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[1].plain_text(), "and another");
//! ```
//!
//! # Markup
//!
//! Trees can be written with square-bracket markup:
//!
//! - `[bold]text[/]` - bold text
//! - `[red]text[/]` - red foreground color
//! - `[not italic on blue]text[/]` - explicitly not italic, blue background
//! - `[/]` - close most recent tag, `[/bold]` - close up to the named tag
//! - `\[` - escaped bracket (literal `[`)

pub mod color;
pub mod component;
pub mod error;
pub mod parser;
pub mod split;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use component::{Component, ComponentBuilder, ComponentKind};
pub use error::{ColorParseError, MarkupError, SplitError, StyleParseError};
pub use split::{Delimiter, Splitter, split};
pub use style::{MergeStrategy, Style, TextDecoration};
