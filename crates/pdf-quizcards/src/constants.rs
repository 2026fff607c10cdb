//! Shared constants for card layout
//!
//! This module centralizes magic numbers and constants used throughout
//! the layout and rendering process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Card Dimensions
// =============================================================================

/// Default card width (business card, landscape)
pub const DEFAULT_CARD_WIDTH_MM: f32 = 91.0;

/// Default card height
pub const DEFAULT_CARD_HEIGHT_MM: f32 = 59.0;

// =============================================================================
// Size Label
// =============================================================================

/// Vertical gap between the top edge of the first card and the size label
pub const SIZE_LABEL_OFFSET: f32 = 6.0;

/// Default font size for the size label (points)
pub const SIZE_LABEL_FONT_SIZE: f32 = 8.0;

// =============================================================================
// Text Metrics
// =============================================================================

/// Baseline distance below the top of a line box, as a fraction of font size
pub const ASCENT_RATIO: f32 = 0.8;

/// Spaces per tab inside code blocks
pub const TAB_WIDTH: usize = 4;

// =============================================================================
// Font Metrics
// =============================================================================

/// Advance widths below are in 1/1000 em, indexed by `char - ' '` for the
/// printable ASCII range (WinAnsi 0x20..=0x7E), from the standard Adobe AFMs.
pub const AFM_FIRST_CHAR: u32 = 0x20;

/// Helvetica advance widths
pub const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths
pub const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width assumed for characters outside the tables; no WinAnsi glyph of
/// either face is wider
pub const AFM_FALLBACK_WIDTH: u16 = 1015;

// =============================================================================
// Images
// =============================================================================

/// JPEG quality used when embedding images
pub const IMAGE_JPEG_QUALITY: u8 = 90;
