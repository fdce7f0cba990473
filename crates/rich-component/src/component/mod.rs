//! Component tree.
//!
//! A [`Component`] is an immutable node holding its own style and an
//! ordered list of children. Literal text nodes also carry content;
//! container nodes only group and style their children. Every operation
//! that "changes" a component returns a new value.

mod builder;

pub use builder::ComponentBuilder;

use crate::error::MarkupError;
use crate::split::Delimiter;
use crate::style::{MergeStrategy, Style};

/// What kind of node a [`Component`] is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Literal text content.
    Text(String),
    /// No content of its own; exists to group and style children.
    Container,
}

/// A node in a styled rich-text tree.
///
/// # Examples
///
/// ```
/// use rich_component::{Component, NamedColor};
///
/// let line = Component::styled("Hello", NamedColor::Green)
///     .append(Component::text(" world"));
/// assert_eq!(line.plain_text(), "Hello world");
/// assert_eq!(line.children().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Component {
    kind: ComponentKind,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    /// Unstyled literal text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::styled(content, Style::default())
    }

    /// Literal text with the given own style.
    pub fn styled(content: impl Into<String>, style: impl Into<Style>) -> Self {
        Self {
            kind: ComponentKind::Text(content.into()),
            style: style.into(),
            children: Vec::new(),
        }
    }

    /// Literal text with no content, style or children.
    pub fn empty() -> Self {
        Self::text("")
    }

    /// Unstyled container grouping the given children.
    pub fn container(children: Vec<Component>) -> Self {
        Self {
            kind: ComponentKind::Container,
            style: Style::default(),
            children,
        }
    }

    /// Start building a literal text component.
    pub fn builder() -> ComponentBuilder {
        ComponentBuilder::new()
    }

    /// Parse markup such as `[bold red]Hello[/] world` into a tree.
    pub fn from_markup(input: &str) -> Result<Self, MarkupError> {
        crate::parser::parse(input)
    }

    /// The node kind.
    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// Own style, without anything inherited from ancestors.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Children in document order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Literal content, or `None` for containers.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ComponentKind::Text(content) => Some(content.as_str()),
            ComponentKind::Container => None,
        }
    }

    /// Returns true for literal text nodes.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ComponentKind::Text(_))
    }

    /// Returns true for a literal with no content and no children.
    ///
    /// Empty components render nothing and can be dropped or absorbed into
    /// a neighbour without changing the document.
    pub fn is_empty(&self) -> bool {
        matches!(&self.kind, ComponentKind::Text(content) if content.is_empty())
            && self.children.is_empty()
    }

    /// Copy of this node with its children replaced.
    pub fn with_children(&self, children: Vec<Component>) -> Self {
        Self {
            kind: self.kind.clone(),
            style: self.style,
            children,
        }
    }

    /// Copy of this node with its own style replaced.
    pub fn with_style(&self, style: impl Into<Style>) -> Self {
        Self {
            kind: self.kind.clone(),
            style: style.into(),
            children: self.children.clone(),
        }
    }

    /// Copy of this node with `child` added after its existing children.
    pub fn append(&self, child: impl Into<Component>) -> Self {
        let mut children = Vec::with_capacity(self.children.len() + 1);
        children.extend_from_slice(&self.children);
        children.push(child.into());
        self.with_children(children)
    }

    /// Rendered text: every literal's content in document order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    fn write_plain_text(&self, out: &mut String) {
        if let Some(content) = self.content() {
            out.push_str(content);
        }
        for child in &self.children {
            child.write_plain_text(out);
        }
    }

    /// Non-empty runs of literal text paired with their effective style.
    ///
    /// The effective style is the node's own style with every unset
    /// attribute filled from its ancestors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_component::{Component, TextDecoration};
    ///
    /// let doc = Component::styled("bold ", TextDecoration::BOLD)
    ///     .append(Component::text("still bold"));
    /// let segments = doc.segments();
    /// assert_eq!(segments.len(), 2);
    /// assert_eq!(segments[1].0, "still bold");
    /// assert_eq!(segments[1].1.decoration(TextDecoration::BOLD), Some(true));
    /// ```
    pub fn segments(&self) -> Vec<(&str, Style)> {
        let mut out = Vec::new();
        self.collect_segments(&Style::default(), &mut out);
        out
    }

    fn collect_segments<'a>(&'a self, inherited: &Style, out: &mut Vec<(&'a str, Style)>) {
        let effective = self.style.merge(inherited, MergeStrategy::IfAbsentOnTarget);
        if let Some(content) = self.content().filter(|c| !c.is_empty()) {
            out.push((content, effective));
        }
        for child in &self.children {
            child.collect_segments(&effective, out);
        }
    }

    /// Number of levels in this tree; a lone node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Component::depth)
            .max()
            .unwrap_or(0)
    }

    /// Split this tree on every match of `delimiter`.
    ///
    /// Returns the sibling trees between delimiter matches, in order, with
    /// each fragment keeping the styling it had in the original document.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_component::Component;
    ///
    /// let parts = Component::text("A line\nand another").split("\n");
    /// assert_eq!(parts, vec![Component::text("A line"), Component::text("and another")]);
    /// ```
    pub fn split<D: Delimiter + ?Sized>(&self, delimiter: &D) -> Vec<Component> {
        crate::split::split(self, delimiter)
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Component {
    fn from(content: &str) -> Self {
        Component::text(content)
    }
}

impl From<String> for Component {
    fn from(content: String) -> Self {
        Component::text(content)
    }
}

impl From<ComponentBuilder> for Component {
    fn from(builder: ComponentBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use crate::style::TextDecoration;

    #[test]
    fn empty_predicate() {
        assert!(Component::empty().is_empty());
        assert!(Component::styled("", NamedColor::Red).is_empty());
        assert!(!Component::text("x").is_empty());
        assert!(!Component::empty().append("x").is_empty());
        assert!(!Component::container(Vec::new()).is_empty());
    }

    #[test]
    fn content_by_kind() {
        assert_eq!(Component::text("abc").content(), Some("abc"));
        assert_eq!(Component::container(Vec::new()).content(), None);
        assert!(Component::text("").is_text());
        assert!(!Component::container(Vec::new()).is_text());
    }

    #[test]
    fn append_does_not_touch_original() {
        let original = Component::text("a");
        let appended = original.append("b");
        assert!(original.children().is_empty());
        assert_eq!(appended.children(), &[Component::text("b")]);
        assert_eq!(appended.plain_text(), "ab");
    }

    #[test]
    fn with_style_keeps_children() {
        let node = Component::text("a").append("b");
        let restyled = node.with_style(TextDecoration::ITALIC);
        assert_eq!(restyled.children(), node.children());
        assert_eq!(
            restyled.style().decoration(TextDecoration::ITALIC),
            Some(true)
        );
        assert!(node.style().is_empty());
    }

    #[test]
    fn with_children_keeps_style() {
        let node = Component::styled("a", NamedColor::Red).append("b");
        let stripped = node.with_children(Vec::new());
        assert_eq!(stripped, Component::styled("a", NamedColor::Red));
    }

    #[test]
    fn plain_text_is_pre_order() {
        let doc = Component::text("1")
            .append(Component::text("2").append("3"))
            .append(Component::container(vec!["4".into(), "5".into()]));
        assert_eq!(doc.plain_text(), "12345");
    }

    #[test]
    fn segments_inherit_style() {
        let doc = Component::container(vec![
            Component::styled("red", NamedColor::Red).append("still red"),
            Component::text("plain"),
        ])
        .with_style(TextDecoration::BOLD);

        let segments = doc.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].0, "still red");
        assert_eq!(segments[1].1.color, Some(NamedColor::Red.into()));
        assert_eq!(segments[2].1.color, None);
        assert!(
            segments
                .iter()
                .all(|(_, style)| style.decoration(TextDecoration::BOLD) == Some(true))
        );
    }

    #[test]
    fn depth_counts_levels() {
        assert_eq!(Component::text("a").depth(), 1);
        assert_eq!(Component::text("a").append("b").depth(), 2);
        assert_eq!(
            Component::text("a")
                .append("b")
                .append(Component::text("c").append("d"))
                .depth(),
            3
        );
    }
}
