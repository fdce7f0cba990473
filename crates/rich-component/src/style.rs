//! Style types for components.
//!
//! A [`Style`] holds only the attributes explicitly set on a component.
//! Every attribute can be left unset, which lets a child inherit it from
//! its ancestors through [`Style::merge`].

use bitflags::bitflags;

use crate::color::Color;
use crate::error::StyleParseError;

bitflags! {
    /// Text decorations.
    ///
    /// A [`Style`] tracks two sets of these: decorations explicitly turned
    /// on and decorations explicitly turned off. A flag in neither set is
    /// unset and will be inherited.
    ///
    /// # Example
    ///
    /// ```
    /// use rich_component::TextDecoration;
    ///
    /// let flags = TextDecoration::BOLD | TextDecoration::ITALIC;
    /// assert!(flags.contains(TextDecoration::BOLD));
    /// assert!(!flags.contains(TextDecoration::UNDERLINED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextDecoration: u8 {
        const BOLD          = 0b0000_0001;
        const ITALIC        = 0b0000_0010;
        const UNDERLINED    = 0b0000_0100;
        const STRIKETHROUGH = 0b0000_1000;
        /// Scrambled, unreadable glyphs.
        const OBFUSCATED    = 0b0001_0000;
    }
}

/// How [`Style::merge`] resolves attributes present on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Every attribute set on the source overwrites the target.
    Always,
    /// The target is returned unchanged.
    Never,
    /// Attributes set on the target are kept; unset ones are filled from
    /// the source.
    #[default]
    IfAbsentOnTarget,
}

/// Own (non-inherited) style of a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground (text) color.
    pub color: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Decorations explicitly turned on.
    pub decorations: TextDecoration,
    /// Decorations explicitly turned off.
    pub disabled: TextDecoration,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.background.is_none()
            && self.decorations.is_empty()
            && self.disabled.is_empty()
    }

    /// Set the foreground color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Explicitly turn the given decorations on.
    pub fn decorate(mut self, flags: TextDecoration) -> Self {
        self.decorations |= flags;
        self.disabled -= flags;
        self
    }

    /// Explicitly turn the given decorations off.
    pub fn undecorate(mut self, flags: TextDecoration) -> Self {
        self.disabled |= flags;
        self.decorations -= flags;
        self
    }

    /// State of a single decoration: `Some(true)` if on, `Some(false)` if
    /// explicitly off, `None` if unset.
    pub fn decoration(&self, flag: TextDecoration) -> Option<bool> {
        if self.decorations.contains(flag) {
            Some(true)
        } else if self.disabled.contains(flag) {
            Some(false)
        } else {
            None
        }
    }

    /// Decorations that are set, either on or off.
    fn decided(&self) -> TextDecoration {
        self.decorations | self.disabled
    }

    /// Merge `source` into this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_component::{MergeStrategy, NamedColor, Style, TextDecoration};
    ///
    /// let own = Style::new().color(NamedColor::Red);
    /// let inherited = Style::new()
    ///     .color(NamedColor::Green)
    ///     .decorate(TextDecoration::BOLD);
    ///
    /// let effective = own.merge(&inherited, MergeStrategy::IfAbsentOnTarget);
    /// assert_eq!(effective.color, Some(NamedColor::Red.into()));
    /// assert_eq!(effective.decoration(TextDecoration::BOLD), Some(true));
    /// ```
    pub fn merge(&self, source: &Style, strategy: MergeStrategy) -> Style {
        match strategy {
            MergeStrategy::Never => *self,
            MergeStrategy::Always => {
                let overridden = source.decided();
                Style {
                    color: source.color.or(self.color),
                    background: source.background.or(self.background),
                    decorations: (self.decorations - overridden) | source.decorations,
                    disabled: (self.disabled - overridden) | source.disabled,
                }
            }
            MergeStrategy::IfAbsentOnTarget => {
                let absent = !self.decided();
                Style {
                    color: self.color.or(source.color),
                    background: self.background.or(source.background),
                    decorations: self.decorations | (source.decorations & absent),
                    disabled: self.disabled | (source.disabled & absent),
                }
            }
        }
    }

    /// Parse a style from a string like `"bold red on blue"`.
    ///
    /// Supported syntax:
    /// - Decorations: `bold`, `b`, `italic`, `i`, `underlined`, `underline`,
    ///   `u`, `strikethrough`, `strike`, `s`, `obfuscated`, `o`
    /// - Explicitly disabled decoration: `not bold`
    /// - Foreground color: `red`, `#ff5733`, `rgb(255,87,51)`
    /// - Background color: `on red`, `on #ff5733`
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_component::{Style, TextDecoration};
    ///
    /// let style = Style::parse("bold red").unwrap();
    /// assert_eq!(style.decoration(TextDecoration::BOLD), Some(true));
    /// assert!(style.color.is_some());
    ///
    /// let style = Style::parse("not italic on blue").unwrap();
    /// assert_eq!(style.decoration(TextDecoration::ITALIC), Some(false));
    /// assert!(style.background.is_some());
    /// ```
    pub fn parse(input: &str) -> Result<Self, StyleParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(StyleParseError::Empty);
        }

        let mut style = Style::new();
        let mut words = input.split_whitespace();

        while let Some(word) = words.next() {
            let word_lower = word.to_lowercase();

            match word_lower.as_str() {
                "on" => {
                    let color_word = words
                        .next()
                        .ok_or_else(|| StyleParseError::DanglingKeyword("on".to_string()))?;
                    style.background = Some(Color::parse(color_word)?);
                }
                "not" => {
                    let name = words
                        .next()
                        .ok_or_else(|| StyleParseError::DanglingKeyword("not".to_string()))?;
                    let flag = Self::parse_decoration(&name.to_lowercase())
                        .ok_or_else(|| StyleParseError::UnknownWord(name.to_string()))?;
                    style = style.undecorate(flag);
                }
                _ => {
                    if let Some(flag) = Self::parse_decoration(&word_lower) {
                        style = style.decorate(flag);
                    } else if let Ok(color) = Color::parse(word) {
                        style.color = Some(color);
                    } else {
                        return Err(StyleParseError::UnknownWord(word.to_string()));
                    }
                }
            }
        }

        Ok(style)
    }

    /// Parse a decoration keyword.
    fn parse_decoration(word: &str) -> Option<TextDecoration> {
        let flag = match word {
            "bold" | "b" => TextDecoration::BOLD,
            "italic" | "i" => TextDecoration::ITALIC,
            "underlined" | "underline" | "u" => TextDecoration::UNDERLINED,
            "strikethrough" | "strike" | "s" => TextDecoration::STRIKETHROUGH,
            "obfuscated" | "o" => TextDecoration::OBFUSCATED,
            _ => return None,
        };
        Some(flag)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style::new().color(color)
    }
}

impl From<crate::color::NamedColor> for Style {
    fn from(color: crate::color::NamedColor) -> Self {
        Style::new().color(color)
    }
}

impl From<TextDecoration> for Style {
    fn from(flags: TextDecoration) -> Self {
        Style::new().decorate(flags)
    }
}
