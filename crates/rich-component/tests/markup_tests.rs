//! Tests for building component trees from markup.

use rich_component::{Component, MarkupError, NamedColor, Style, TextDecoration};

// ============================================================================
// Basic Parsing
// ============================================================================

#[test]
fn parse_plain_text() {
    let doc = Component::from_markup("Hello World").unwrap();
    assert_eq!(doc, Component::text("Hello World"));
}

#[test]
fn parse_whitespace_only() {
    let doc = Component::from_markup("   ").unwrap();
    assert_eq!(doc.plain_text(), "   ");
}

#[test]
fn parse_empty_string() {
    assert!(Component::from_markup("").unwrap().is_empty());
}

// ============================================================================
// Tags
// ============================================================================

#[test]
fn parse_color_tag() {
    let doc = Component::from_markup("[red]Hello[/]").unwrap();
    assert_eq!(doc, Component::styled("Hello", NamedColor::Red));
}

#[test]
fn parse_background_tag() {
    let doc = Component::from_markup("[on dark_blue]Hello[/]").unwrap();
    assert_eq!(doc.style().background, Some(NamedColor::DarkBlue.into()));
    assert_eq!(doc.style().color, None);
}

#[test]
fn parse_full_style() {
    let doc = Component::from_markup("[bold not italic white on #000]Hello[/]").unwrap();
    let style = doc.style();
    assert_eq!(style.decoration(TextDecoration::BOLD), Some(true));
    assert_eq!(style.decoration(TextDecoration::ITALIC), Some(false));
    assert_eq!(style.color, Some(NamedColor::White.into()));
    assert_eq!(style.background, Some(rich_component::Color::Rgb(0, 0, 0)));
}

#[test]
fn parse_named_close_tag() {
    let doc = Component::from_markup("[bold]Hello[/bold] World").unwrap();
    assert_eq!(
        doc,
        Component::empty()
            .append(Component::styled("Hello", TextDecoration::BOLD))
            .append(" World")
    );
}

#[test]
fn parse_close_outer_closes_inner() {
    let doc = Component::from_markup("[gold]a[italic]b[/gold]c").unwrap();
    assert_eq!(
        doc,
        Component::empty()
            .append(
                Component::styled("a", NamedColor::Gold)
                    .append(Component::styled("b", TextDecoration::ITALIC))
            )
            .append("c")
    );
}

#[test]
fn parse_siblings() {
    let doc = Component::from_markup("[red]a[/][blue]b[/]").unwrap();
    assert_eq!(
        doc,
        Component::empty()
            .append(Component::styled("a", NamedColor::Red))
            .append(Component::styled("b", NamedColor::Blue))
    );
}

// ============================================================================
// Effective Styles
// ============================================================================

#[test]
fn nested_tags_inherit() {
    let doc = Component::from_markup("[bold]a[red]b[not bold]c[/][/][/]").unwrap();
    let segments = doc.segments();

    assert_eq!(
        segments,
        vec![
            ("a", Style::from(TextDecoration::BOLD)),
            ("b", Style::from(TextDecoration::BOLD).color(NamedColor::Red)),
            (
                "c",
                Style::new()
                    .color(NamedColor::Red)
                    .undecorate(TextDecoration::BOLD)
            ),
        ]
    );
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn parse_escaped_brackets() {
    let doc = Component::from_markup(r"[bold]\[x\][/] \\").unwrap();
    assert_eq!(doc.plain_text(), r"[x] \");
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn parse_unclosed_bracket() {
    assert_eq!(
        Component::from_markup("Hello [bold"),
        Err(MarkupError::UnclosedTag(6))
    );
}

#[test]
fn parse_empty_tag() {
    assert_eq!(Component::from_markup("a[]"), Err(MarkupError::EmptyTag(1)));
}

#[test]
fn parse_bad_escape() {
    assert_eq!(
        Component::from_markup(r"\x"),
        Err(MarkupError::InvalidEscape(0))
    );
}

#[test]
fn parse_unknown_style_word() {
    let err = Component::from_markup("[bold glitter]x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid style in tag `bold glitter`: unknown style word: glitter"
    );
}
