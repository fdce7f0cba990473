use crate::color::Color;
use crate::style::{Style, TextDecoration};

use super::Component;

/// Fluent builder for literal text components.
///
/// ```
/// use rich_component::{Component, NamedColor};
///
/// let doc = Component::builder()
///     .content("ad-")
///     .color(NamedColor::Gold)
///     .append(Component::text("venture"))
///     .build();
/// assert_eq!(doc.plain_text(), "ad-venture");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComponentBuilder {
    content: String,
    style: Style,
    children: Vec<Component>,
}

impl ComponentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Replace the whole style.
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.style = self.style.color(color);
        self
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.style = self.style.background(color);
        self
    }

    /// Turn a decoration on (`true`) or explicitly off (`false`).
    pub fn decoration(mut self, flags: TextDecoration, enabled: bool) -> Self {
        self.style = if enabled {
            self.style.decorate(flags)
        } else {
            self.style.undecorate(flags)
        };
        self
    }

    pub fn append(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn build(self) -> Component {
        Component::styled(self.content, self.style).with_children(self.children)
    }
}
