//! Explicit text styling
//!
//! A `StyleConfig` is built once and passed by reference into the deck
//! builder and the card renderer. There is no process-wide style state.

use crate::constants::{
    AFM_FALLBACK_WIDTH, AFM_FIRST_CHAR, HELVETICA_BOLD_WIDTHS, HELVETICA_WIDTHS, mm_to_pt,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The PDF base-14 fonts used for card text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 4] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::Courier,
        BuiltinFont::CourierBold,
    ];

    /// PostScript name used as `BaseFont`
    pub fn base_font(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
        }
    }

    /// Resource name inside page `Font` dictionaries
    pub fn resource_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::Courier => "F3",
            BuiltinFont::CourierBold => "F4",
        }
    }

    pub fn is_monospace(self) -> bool {
        matches!(self, BuiltinFont::Courier | BuiltinFont::CourierBold)
    }

    /// Advance width of `ch` in ems, from the standard AFM metrics.
    ///
    /// Characters with no known metric get the widest WinAnsi advance so a
    /// measured line never comes out narrower than the one drawn.
    pub fn glyph_width(self, ch: char) -> f32 {
        if self.is_monospace() {
            return 0.6;
        }
        let bold = self == BuiltinFont::HelveticaBold;
        let table = if bold {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        let units = match ch {
            ' '..='~' => table[(ch as u32 - AFM_FIRST_CHAR) as usize],
            '\u{2013}' | '\u{20ac}' => 556,
            '\u{2014}' | '\u{2026}' => 1000,
            '\u{2018}' | '\u{2019}' => if bold { 278 } else { 222 },
            '\u{201c}' | '\u{201d}' => if bold { 500 } else { 333 },
            '\u{2022}' => 350,
            _ => AFM_FALLBACK_WIDTH,
        };
        f32::from(units) / 1000.0
    }

    /// Width of `text` set at `size` points
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.glyph_width(c)).sum::<f32>() * size
    }
}

/// An RGB colour with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const LIGHT_GREY: Color = Color::rgb(0.827, 0.827, 0.827);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Horizontal alignment of paragraph lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Font, size and line spacing for one kind of text
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextStyle {
    pub font: BuiltinFont,
    /// Font used for bold spans
    pub bold_font: BuiltinFont,
    pub size_pt: f32,
    pub leading_pt: f32,
    pub alignment: Alignment,
}

impl TextStyle {
    fn sans(size_pt: f32) -> Self {
        Self {
            font: BuiltinFont::Helvetica,
            bold_font: BuiltinFont::HelveticaBold,
            size_pt,
            leading_pt: size_pt * 1.25,
            alignment: Alignment::Left,
        }
    }
}

/// Every style decision for card content
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleConfig {
    /// Cover title
    pub title: TextStyle,
    /// Questions and cover paragraphs
    pub body: TextStyle,
    /// "Question:" / "Answer n:" labels
    pub fine: TextStyle,
    /// Answers and inline code
    pub code: TextStyle,
    /// Vertical gap between consecutive content items
    pub item_spacing_pt: f32,
    pub text_color: Color,
    pub link_color: Color,
    pub frame_color: Color,
    pub frame_line_width_pt: f32,
    pub label_size_pt: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: TextStyle {
                font: BuiltinFont::HelveticaBold,
                bold_font: BuiltinFont::HelveticaBold,
                size_pt: 18.0,
                leading_pt: 22.0,
                alignment: Alignment::Center,
            },
            body: TextStyle::sans(14.0),
            fine: TextStyle::sans(10.0),
            code: TextStyle {
                font: BuiltinFont::Courier,
                bold_font: BuiltinFont::CourierBold,
                size_pt: 10.0,
                leading_pt: 12.5,
                alignment: Alignment::Left,
            },
            item_spacing_pt: 6.0,
            text_color: Color::BLACK,
            link_color: Color::BLUE,
            frame_color: Color::LIGHT_GREY,
            frame_line_width_pt: mm_to_pt(0.25),
            label_size_pt: crate::constants::SIZE_LABEL_FONT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_is_monospaced() {
        let font = BuiltinFont::Courier;
        assert_eq!(font.text_width("iiii", 10.0), font.text_width("MMMM", 10.0));
        assert!((font.text_width("abcde", 10.0) - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_helvetica_narrow_and_wide_glyphs() {
        let font = BuiltinFont::Helvetica;
        assert!(font.text_width("iiii", 10.0) < font.text_width("MMMM", 10.0));
        assert!(
            BuiltinFont::HelveticaBold.text_width("word", 10.0) > font.text_width("word", 10.0)
        );
    }

    #[test]
    fn test_helvetica_capitals_use_afm_widths() {
        // H 722, O 778, U 722, N 722, D 722
        assert!((BuiltinFont::Helvetica.text_width("HOUND", 1000.0) - 3666.0).abs() < 1e-2);
        assert!((BuiltinFont::HelveticaBold.text_width("HOUND", 1000.0) - 3666.0).abs() < 1e-2);
        assert!((BuiltinFont::HelveticaBold.text_width("ABC", 1000.0) - 2166.0).abs() < 1e-2);
    }

    #[test]
    fn test_unknown_glyph_is_never_narrow() {
        let font = BuiltinFont::Helvetica;
        let widest = "@ABCDEFGHIJKLMNOPQRSTUVWXYZW"
            .chars()
            .map(|c| font.glyph_width(c))
            .fold(0.0, f32::max);
        assert!(font.glyph_width('\u{4e2d}') >= widest);
        assert!((font.glyph_width('\u{2014}') - 1.0).abs() < 1e-6);
    }
}
