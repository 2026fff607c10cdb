//! Layout data types
//!
//! These types represent the intermediate layout results between the deck
//! and PDF rendering: the chosen grid, sheet groups with their placements,
//! and content laid out against a width.

use crate::style::{BuiltinFont, Color};
use crate::types::Dimension;
use std::path::PathBuf;

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex); holds the card fronts
    Front,
    /// Back of the sheet (printed second in duplex); holds the card backs
    Back,
}

impl SheetSide {
    /// Back sides are mirrored left-to-right
    pub fn is_mirrored(self) -> bool {
        self == SheetSide::Back
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result of fitting cards onto a page
///
/// Computed once per deck and reused for every sheet group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFit {
    /// Page size after the rotation decision
    pub page: Dimension,
    /// Card footprint
    pub card: Dimension,
    /// Cards along the page width
    pub cols: usize,
    /// Cards along the page height
    pub rows: usize,
    /// Whether the page was turned by 90° to improve the yield
    pub rotated: bool,
}

impl GridFit {
    /// Cards per sheet side
    pub fn capacity(&self) -> usize {
        self.cols * self.rows
    }

    /// Bottom-left corner of the card grid, centred on the page
    pub fn grid_origin(&self) -> (f32, f32) {
        let x0 = self.page.width / 2.0 - self.cols as f32 * self.card.width / 2.0;
        let y0 = self.page.height / 2.0 - self.rows as f32 * self.card.height / 2.0;
        (x0, y0)
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Where one face goes on its sheet side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into the flattened face sequence (front0, back0, front1, ...)
    pub face_index: usize,
    /// Index of the card the face belongs to
    pub pair_index: usize,
    /// Cell in the grid
    pub cell: GridPosition,
    /// Bottom-left corner of the card in page coordinates
    pub x: f32,
    pub y: f32,
    /// Back faces swap their left/right card margins
    pub mirrored: bool,
}

/// Informational "paper / card size" line printed above the first card
#[derive(Debug, Clone, PartialEq)]
pub struct SizeLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Everything printed on one side of one physical sheet (one output page)
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGroup {
    /// Position of this group in the output (page index)
    pub index: usize,
    pub side: SheetSide,
    pub placements: Vec<Placement>,
    pub label: Option<SizeLabel>,
}

impl SheetGroup {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

// =============================================================================
// Laid-out content
// =============================================================================

/// A run of text sharing font and colour, positioned within its line
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: BuiltinFont,
    pub size: f32,
    pub color: Color,
    /// Offset from the left edge of the line box
    pub x: f32,
    pub width: f32,
}

/// One line of laid-out text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLine {
    pub runs: Vec<TextRun>,
    /// Offset from the left edge of the content area (alignment)
    pub x_offset: f32,
    pub width: f32,
}

impl TextLine {
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Lines of a paragraph or code block
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<TextLine>,
    /// Largest font size used; determines the baseline within a line box
    pub font_size: f32,
    pub leading: f32,
}

/// An image scaled to the content width
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayout {
    pub path: PathBuf,
    pub width: f32,
    pub height: f32,
}

/// A content item reflowed against a fixed width
#[derive(Debug, Clone, PartialEq)]
pub enum LaidOutItem {
    Text(TextLayout),
    Image(ImageLayout),
}

impl LaidOutItem {
    /// Natural height at scale 1
    pub fn height(&self) -> f32 {
        match self {
            LaidOutItem::Text(text) => text.lines.len() as f32 * text.leading,
            LaidOutItem::Image(image) => image.height,
        }
    }
}
