//! Builds a component tree from markup.
//!
//! Each opening tag starts a new literal node styled by the tag. The first
//! run of text inside the tag becomes the node's content; anything after a
//! nested tag becomes further children.

use crate::component::Component;
use crate::error::MarkupError;

use super::lexer::{Lexer, Token};
use super::tag::OpenTag;

/// Parses markup into a component tree.
///
/// # Examples
///
/// ```
/// use rich_component::parser::parse;
/// use rich_component::{Component, NamedColor};
///
/// let doc = parse("[green]A line[/]").unwrap();
/// assert_eq!(doc, Component::styled("A line", NamedColor::Green));
///
/// let doc = parse("Hello [bold]World[/]").unwrap();
/// assert_eq!(doc.plain_text(), "Hello World");
/// assert_eq!(doc.children().len(), 1);
/// ```
pub fn parse(input: &str) -> Result<Component, MarkupError> {
    let mut parser = Parser::new();
    for token in Lexer::new(input) {
        parser.process_token(token?)?;
    }

    let root = parser.finish();
    log::debug!("parsed markup into a tree of depth {}", root.depth());
    Ok(root)
}

/// A node under construction.
struct Frame<'a> {
    /// The tag that opened this node; `None` for the document root.
    tag: Option<OpenTag<'a>>,
    content: String,
    children: Vec<Component>,
}

impl<'a> Frame<'a> {
    fn new(tag: Option<OpenTag<'a>>) -> Self {
        Self {
            tag,
            content: String::new(),
            children: Vec::new(),
        }
    }

    fn push_text(&mut self, text: String) {
        if self.children.is_empty() {
            self.content.push_str(&text);
        } else {
            self.children.push(Component::text(text));
        }
    }

    fn build(self) -> Component {
        let style = self.tag.map(|tag| tag.style).unwrap_or_default();
        Component::styled(self.content, style).with_children(self.children)
    }
}

struct Parser<'a> {
    /// Open nodes; the first entry is the document root and never closes early.
    stack: Vec<Frame<'a>>,
    /// Text seen since the last tag.
    text: String,
}

impl<'a> Parser<'a> {
    fn new() -> Self {
        Self {
            stack: vec![Frame::new(None)],
            text: String::new(),
        }
    }

    fn process_token(&mut self, token: Token<'a>) -> Result<(), MarkupError> {
        match token {
            Token::Text(text) => self.text.push_str(text),
            Token::Escaped(c) => self.text.push(c),
            Token::OpenTag(content) => {
                let tag = OpenTag::parse(content)?;
                self.flush_text();
                self.stack.push(Frame::new(Some(tag)));
            }
            Token::CloseTag(None) => {
                self.flush_text();
                if self.stack.len() > 1 {
                    self.close_top();
                }
            }
            Token::CloseTag(Some(name)) => {
                self.flush_text();
                self.close_matching(name);
            }
        }
        Ok(())
    }

    fn current(&mut self) -> &mut Frame<'a> {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.current().push_text(text);
        }
    }

    /// Close the innermost open tag, attaching it to its parent.
    fn close_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let node = frame.build();
            // A tag that wrapped nothing renders nothing.
            if !node.is_empty() {
                self.current().children.push(node);
            }
        }
    }

    /// Close open tags up to and including the innermost one named `name`.
    fn close_matching(&mut self, name: &str) {
        let Some(index) = self
            .stack
            .iter()
            .rposition(|frame| frame.tag.as_ref().is_some_and(|tag| tag.closed_by(name)))
        else {
            log::debug!("ignoring close tag [/{name}] with no matching open tag");
            return;
        };

        while self.stack.len() > index {
            self.close_top();
        }
    }

    fn finish(mut self) -> Component {
        self.flush_text();
        while self.stack.len() > 1 {
            self.close_top();
        }

        let root = match self.stack.pop() {
            Some(frame) => frame.build(),
            None => Component::empty(),
        };

        // A document that is a single tag is that tag's node.
        if root.content() == Some("") && root.children().len() == 1 {
            root.children()[0].clone()
        } else {
            root
        }
    }
}
