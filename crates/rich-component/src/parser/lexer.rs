//! Lexer for component markup.

use crate::error::MarkupError;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag content (without brackets): `bold red`
    OpenTag(&'a str),
    /// Closing tag: `None` for `[/]`, `Some("bold")` for `[/bold]`
    CloseTag(Option<&'a str>),
    /// Escaped special character.
    Escaped(char),
}

/// Lexer for component markup.
///
/// # Examples
///
/// ```
/// use rich_component::parser::Lexer;
///
/// let tokens: Vec<_> = Lexer::new("[bold]Hello[/]").collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text until we hit a special character or end of input.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;
        let len = self
            .remaining()
            .find(['[', '\\'])
            .unwrap_or(self.remaining().len());
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Consume a tag (including the brackets).
    fn consume_tag(&mut self) -> Result<Token<'a>, MarkupError> {
        let tag_start = self.pos;
        self.advance(); // '['

        let Some(len) = self.remaining().find(']') else {
            return Err(MarkupError::UnclosedTag(tag_start));
        };
        let content = &self.remaining()[..len];
        self.pos += len + 1;

        if let Some(rest) = content.strip_prefix('/') {
            let rest = rest.trim();
            Ok(Token::CloseTag((!rest.is_empty()).then_some(rest)))
        } else if content.trim().is_empty() {
            Err(MarkupError::EmptyTag(tag_start))
        } else {
            Ok(Token::OpenTag(content))
        }
    }

    /// Consume an escape sequence.
    fn consume_escape(&mut self) -> Result<Token<'a>, MarkupError> {
        let escape_start = self.pos;
        self.advance(); // '\'

        match self.advance() {
            Some(c @ ('[' | ']' | '\\')) => Ok(Token::Escaped(c)),
            _ => Err(MarkupError::InvalidEscape(escape_start)),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peek()? {
            '[' => Some(self.consume_tag()),
            '\\' => Some(self.consume_escape()),
            _ => Some(Ok(Token::Text(self.consume_text()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input).collect::<Result<Vec<_>, _>>().unwrap()
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("Hello World"), vec![Token::Text("Hello World")]);
    }

    #[test]
    fn lex_open_tag() {
        assert_eq!(lex("[bold]"), vec![Token::OpenTag("bold")]);
    }

    #[test]
    fn lex_close_tags() {
        assert_eq!(lex("[/]"), vec![Token::CloseTag(None)]);
        assert_eq!(lex("[/ bold ]"), vec![Token::CloseTag(Some("bold"))]);
    }

    #[test]
    fn lex_styled_text() {
        assert_eq!(
            lex("ab[bold red]Hello[/]"),
            vec![
                Token::Text("ab"),
                Token::OpenTag("bold red"),
                Token::Text("Hello"),
                Token::CloseTag(None),
            ]
        );
    }

    #[test]
    fn lex_escapes() {
        assert_eq!(
            lex(r"\[not a tag\] \\"),
            vec![
                Token::Escaped('['),
                Token::Text("not a tag"),
                Token::Escaped(']'),
                Token::Text(" "),
                Token::Escaped('\\'),
            ]
        );
    }

    #[test]
    fn lex_errors() {
        let unclosed: Result<Vec<_>, _> = Lexer::new("ok [bold").collect();
        assert_eq!(unclosed, Err(MarkupError::UnclosedTag(3)));

        let empty: Result<Vec<_>, _> = Lexer::new("[ ]").collect();
        assert_eq!(empty, Err(MarkupError::EmptyTag(0)));

        let escape: Result<Vec<_>, _> = Lexer::new(r"a\n").collect();
        assert_eq!(escape, Err(MarkupError::InvalidEscape(1)));

        let trailing: Result<Vec<_>, _> = Lexer::new("\\").collect();
        assert_eq!(trailing, Err(MarkupError::InvalidEscape(0)));
    }

    #[test]
    fn lex_unicode() {
        assert_eq!(
            lex("[bold]日本語[/]"),
            vec![
                Token::OpenTag("bold"),
                Token::Text("日本語"),
                Token::CloseTag(None),
            ]
        );
    }
}
