//! Text colors.
//!
//! A color is either one of the sixteen standard text colors or an
//! arbitrary RGB triple.

use std::fmt;

use crate::error::ColorParseError;

/// The sixteen standard text colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// All named colors, in palette order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Look up a color by name. Accepts `grey` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "black" => NamedColor::Black,
            "dark_blue" => NamedColor::DarkBlue,
            "dark_green" => NamedColor::DarkGreen,
            "dark_aqua" => NamedColor::DarkAqua,
            "dark_red" => NamedColor::DarkRed,
            "dark_purple" => NamedColor::DarkPurple,
            "gold" => NamedColor::Gold,
            "gray" | "grey" => NamedColor::Gray,
            "dark_gray" | "dark_grey" => NamedColor::DarkGray,
            "blue" => NamedColor::Blue,
            "green" => NamedColor::Green,
            "aqua" => NamedColor::Aqua,
            "red" => NamedColor::Red,
            "light_purple" => NamedColor::LightPurple,
            "yellow" => NamedColor::Yellow,
            "white" => NamedColor::White,
            _ => return None,
        };
        Some(color)
    }

    /// RGB components of this color.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => (0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => (0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => (0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => (0xaa, 0x00, 0xaa),
            NamedColor::Gold => (0xff, 0xaa, 0x00),
            NamedColor::Gray => (0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xff),
            NamedColor::Green => (0x55, 0xff, 0x55),
            NamedColor::Aqua => (0x55, 0xff, 0xff),
            NamedColor::Red => (0xff, 0x55, 0x55),
            NamedColor::LightPurple => (0xff, 0x55, 0xff),
            NamedColor::Yellow => (0xff, 0xff, 0x55),
            NamedColor::White => (0xff, 0xff, 0xff),
        }
    }
}

/// A text color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the standard palette colors.
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Named(color)
    }
}

impl Color {
    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `red`, `dark_aqua`, `gold`, etc. (case-insensitive)
    /// - Hex colors: `#RGB`, `#RRGGBB`
    /// - RGB function: `rgb(r, g, b)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_component::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("gold").unwrap(), Color::Named(NamedColor::Gold));
    /// assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
    /// assert_eq!(Color::parse("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(inner) = input
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_func(inner);
        }

        NamedColor::from_name(&input.to_lowercase())
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a hex color (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;

        match digits.as_slice() {
            // #RGB
            [r, g, b] => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
            // #RRGGBB
            [r1, r2, g1, g2, b1, b2] => Ok(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => Err(invalid()),
        }
    }

    /// Parse an RGB function (the part inside the parentheses).
    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();

        let [r, g, b] = parts[..] else {
            return Err(ColorParseError::InvalidRgb(format!("rgb({input})")));
        };

        let channel = |name: &str, value: &str| {
            value
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidRgb(format!("invalid {name}: {value}")))
        };

        Ok(Color::Rgb(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// Convert the color to RGB components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (*r, *g, *b),
            Color::Named(named) => named.to_rgb(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}
