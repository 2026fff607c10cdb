use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizcardError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Unsupported input file: {}", .0.display())]
    UnsupportedInput(PathBuf),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Page sink error: {0}")]
    Sink(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, QuizcardError>;

/// A width/height pair in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The same footprint turned by 90°
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn is_portrait(self) -> bool {
        self.width <= self.height
    }

    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    Portrait,
    /// Landscape: width > height (default for card sheets)
    #[default]
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::A6 => (105.0, 148.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        let (short, long) = if w <= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// Sheet margins - the part of the paper the card grid must stay out of.
/// Only used to decide how many cards fit; the grid itself is centred.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMargins {
    pub top_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
    pub right_mm: f32,
}

impl Default for SheetMargins {
    fn default() -> Self {
        Self {
            top_mm: 15.1,
            bottom_mm: 15.1,
            left_mm: 7.21,
            right_mm: 7.21,
        }
    }
}

/// Padding between a card's edge and its content
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardMargins {
    pub left_mm: f32,
    pub right_mm: f32,
    pub top_mm: f32,
    pub bottom_mm: f32,
}

impl Default for CardMargins {
    fn default() -> Self {
        Self {
            left_mm: 4.0,
            right_mm: 4.0,
            top_mm: 3.0,
            bottom_mm: 3.0,
        }
    }
}

impl CardMargins {
    /// Left and right exchanged, as seen on the back of a flipped sheet
    pub fn mirrored(self) -> Self {
        Self {
            left_mm: self.right_mm,
            right_mm: self.left_mm,
            ..self
        }
    }
}

/// Statistics about a deck laid out on sheets
#[derive(Debug, Clone, PartialEq)]
pub struct DeckStatistics {
    /// Number of physical cards (cover included)
    pub cards: usize,
    /// Number of printable faces (always `2 * cards`)
    pub faces: usize,
    /// Grid columns per sheet side
    pub columns: usize,
    /// Grid rows per sheet side
    pub rows: usize,
    /// Cards per sheet of paper
    pub cards_per_sheet: usize,
    /// Physical sheets of paper
    pub paper_sheets: usize,
    /// Output pages (front and back of each sheet)
    pub output_pages: usize,
    /// Unused grid cells on the last sheet
    pub empty_slots: usize,
    /// Effective page width after the rotation decision, in points
    pub page_width_pt: f32,
    /// Effective page height after the rotation decision, in points
    pub page_height_pt: f32,
}
