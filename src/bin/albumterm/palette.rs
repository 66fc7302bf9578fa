//! Light/dark color sets; applying a theme hint means swapping the active palette.

use albumterm::theme::PresentationHint;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) text: Color,
    pub(crate) muted: Color,
    pub(crate) border: Color,
    /// First half of the "ALBUMS LIST" brand.
    pub(crate) brand: Color,
    pub(crate) brand_alt: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,
    pub(crate) danger: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(244, 244, 246),
    text: Color::Rgb(33, 37, 41),
    muted: Color::Rgb(108, 117, 125),
    border: Color::Rgb(173, 181, 189),
    brand: Color::Rgb(13, 110, 253),
    brand_alt: Color::Rgb(220, 53, 69),
    highlight_bg: Color::Rgb(13, 110, 253),
    highlight_fg: Color::Rgb(255, 255, 255),
    danger: Color::Rgb(200, 35, 51),
};

const DARK: Palette = Palette {
    background: Color::Rgb(24, 26, 27),
    text: Color::Rgb(222, 226, 230),
    muted: Color::Rgb(134, 142, 150),
    border: Color::Rgb(73, 80, 87),
    brand: Color::Rgb(102, 178, 255),
    brand_alt: Color::Rgb(255, 107, 107),
    highlight_bg: Color::Rgb(102, 178, 255),
    highlight_fg: Color::Rgb(24, 26, 27),
    danger: Color::Rgb(255, 107, 107),
};

impl Palette {
    pub(crate) fn for_hint(hint: &PresentationHint) -> Self {
        if hint.dark_mode {
            DARK
        } else {
            LIGHT
        }
    }
}
