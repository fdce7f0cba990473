//! Parser for component markup.
//!
//! This module contains the lexer, tag parser, and the tree builder.

mod lexer;
mod markup;
mod tag;

pub use lexer::{Lexer, Token};
pub use markup::parse;
pub use tag::OpenTag;
