//! Splitting component trees on a delimiter.
//!
//! [`split`] walks a tree and cuts the literal text of every node on each
//! delimiter match. The result is a flat list of sibling trees: joining
//! their rendered text with the delimiter reproduces the original text,
//! and every fragment renders with the same effective style it had before.
//!
//! Fragments are reattached as the walk unwinds. The first fragment a
//! child produces continues whatever came right before it in document
//! order, so it is appended to the last accumulated part. Any further
//! fragments start new parts. Empty fragments are absorbed, and once a
//! part boundary was crossed the next continuation is grouped in a new
//! container instead of being appended to a part that is already closed.

use std::collections::VecDeque;

use regex::Regex;

use crate::component::Component;
use crate::error::SplitError;
use crate::style::{MergeStrategy, Style};

/// Something that cuts text into pieces.
///
/// Implementations must keep empty pieces: consecutive delimiters yield
/// empty strings between them, and a leading or trailing delimiter yields
/// an empty first or last piece.
pub trait Delimiter {
    /// Cut `text` at every delimiter match.
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

impl Delimiter for Regex {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        Regex::split(self, text).collect()
    }
}

impl Delimiter for str {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split(self).collect()
    }
}

impl Delimiter for String {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split(self.as_str()).collect()
    }
}

impl Delimiter for char {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split(*self).collect()
    }
}

impl<D: Delimiter + ?Sized> Delimiter for &D {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        (**self).split(text)
    }
}

/// Split `root` on every match of `delimiter`.
///
/// The returned list is never empty. Recursion depth equals the depth of
/// the tree; use [`Splitter::max_depth`] for untrusted input.
///
/// # Examples
///
/// ```
/// use rich_component::{Component, NamedColor, split};
///
/// let doc = Component::styled("A line", NamedColor::Green)
///     .append(Component::text("of text\nand another"));
///
/// assert_eq!(
///     split(&doc, "\n"),
///     vec![
///         Component::styled("A line", NamedColor::Green).append(Component::text("of text")),
///         Component::styled("and another", NamedColor::Green),
///     ]
/// );
/// ```
pub fn split<D: Delimiter + ?Sized>(root: &Component, delimiter: &D) -> Vec<Component> {
    let parts: Vec<Component> = split_node(root, &Style::default(), delimiter).into();
    log::debug!("split component tree into {} parts", parts.len());
    parts
}

fn split_node<D: Delimiter + ?Sized>(
    node: &Component,
    inherited: &Style,
    delimiter: &D,
) -> VecDeque<Component> {
    let effective = node.style().merge(inherited, MergeStrategy::IfAbsentOnTarget);
    let mut parts = VecDeque::new();

    match node.content() {
        Some(content) => {
            let mut pieces = delimiter.split(content).into_iter();
            // The leading piece still belongs to this node, so it keeps the
            // node's own style. Later pieces become detached siblings and
            // need the full inherited style.
            parts.push_back(Component::styled(pieces.next().unwrap_or(""), *node.style()));
            parts.extend(pieces.map(|piece| Component::styled(piece, effective)));
        }
        None => parts.push_back(node.with_children(Vec::new())),
    }

    let mut sibling = false;
    for child in node.children() {
        let mut result = split_node(child, &effective, delimiter);

        // Neither side is ever empty: every call seeds at least one part.
        let (Some(root), Some(first)) = (parts.pop_back(), result.pop_front()) else {
            continue;
        };

        if first.is_empty() {
            log::trace!("dropping empty leading fragment");
            parts.push_back(root);
        } else if root.is_empty() {
            log::trace!("absorbing empty part into {:?}", first.content());
            let style = first.style().merge(root.style(), MergeStrategy::IfAbsentOnTarget);
            parts.push_back(first.with_style(style));
            sibling = true;
        } else if sibling {
            log::trace!("grouping detached fragments in a container");
            parts.push_back(Component::container(vec![root, first]));
            sibling = false;
        } else {
            parts.push_back(root.append(first));
        }

        if !result.is_empty() {
            log::trace!("child produced {} detached parts", result.len());
            parts.extend(result);
            sibling = true;
        }
    }

    parts
}

/// A reusable, configurable splitter.
///
/// ```
/// use regex::Regex;
/// use rich_component::{Component, SplitError, Splitter};
///
/// let splitter = Splitter::new(Regex::new(r"\.").unwrap()).max_depth(2);
///
/// let parts = splitter.split(&Component::text("4.10.0")).unwrap();
/// assert_eq!(parts.len(), 3);
///
/// let deep = Component::text("a").append(Component::text("b").append("c"));
/// assert_eq!(splitter.split(&deep), Err(SplitError::DepthExceeded { limit: 2 }));
/// ```
#[derive(Clone, Debug)]
pub struct Splitter<D> {
    delimiter: D,
    max_depth: Option<usize>,
}

impl<D: Delimiter> Splitter<D> {
    /// Create an unbounded splitter.
    pub fn new(delimiter: D) -> Self {
        Self {
            delimiter,
            max_depth: None,
        }
    }

    /// Reject trees nested deeper than `limit` levels before splitting.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// The delimiter this splitter cuts on.
    pub fn delimiter(&self) -> &D {
        &self.delimiter
    }

    /// Split `root`, enforcing the configured depth limit.
    pub fn split(&self, root: &Component) -> Result<Vec<Component>, SplitError> {
        if let Some(limit) = self.max_depth {
            if exceeds_depth(root, limit) {
                log::debug!("refusing to split tree nested deeper than {limit} levels");
                return Err(SplitError::DepthExceeded { limit });
            }
        }
        Ok(split(root, &self.delimiter))
    }
}

/// Iterative check so that the guard itself cannot overflow the stack.
fn exceeds_depth(root: &Component, limit: usize) -> bool {
    let mut stack = vec![(root, 1usize)];
    while let Some((node, depth)) = stack.pop() {
        if depth > limit {
            return true;
        }
        stack.extend(node.children().iter().map(|child| (child, depth + 1)));
    }
    false
}
