//! Console palette shared by the examples.

use colored::{Color, ColoredString, Colorize};

/// Named colors used across the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Violet,
    Purple,
    Brown,
    Orange,
    Gray,
}

impl Palette {
    pub fn color(self) -> Color {
        match self {
            Palette::Red => Color::Red,
            Palette::Green => Color::Green,
            Palette::Blue => Color::Blue,
            Palette::Yellow => Color::Yellow,
            Palette::Cyan => Color::Cyan,
            Palette::Violet => Color::TrueColor { r: 238, g: 130, b: 238 },
            Palette::Purple => Color::Magenta,
            Palette::Brown => Color::TrueColor { r: 165, g: 42, b: 42 },
            Palette::Orange => Color::TrueColor { r: 255, g: 165, b: 0 },
            Palette::Gray => Color::BrightBlack,
        }
    }
}

/// Paints `text` with a palette color.
pub fn paint(text: impl AsRef<str>, palette: Palette) -> ColoredString {
    text.as_ref().color(palette.color())
}

/// Bold heading used at the top of each demo section.
pub fn heading(text: impl AsRef<str>, palette: Palette) -> ColoredString {
    paint(text, palette).bold()
}
