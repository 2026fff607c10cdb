//! Page output for card sheets
//!
//! The layout code only talks to a [`PageSink`]. `PdfSink` is the lopdf
//! implementation used for real output:
//! - Building one content stream per sheet side
//! - Sharing base-14 font objects between pages
//! - Embedding images as JPEG XObjects

mod pdf;
mod xobject;

pub use pdf::PdfSink;

use crate::layout::{LaidOutItem, Rect};
use crate::style::Color;
use crate::types::{Dimension, Result};

/// Receiver of draw commands, one page at a time.
///
/// Pages are appended strictly in call order and never revisited.
pub trait PageSink {
    /// Start a new page of the given size in points.
    fn begin_page(&mut self, size: Dimension) -> Result<()>;

    /// Draw a laid-out item with its top-left corner at (`x`, `top`),
    /// uniformly scaled by `scale`.
    fn draw_item(&mut self, item: &LaidOutItem, x: f32, top: f32, scale: f32) -> Result<()>;

    /// Stroke the outline of `rect`.
    fn draw_rect(&mut self, rect: Rect, color: Color, line_width: f32) -> Result<()>;

    /// Draw a single line of informational text with its baseline at `y`.
    fn draw_label(&mut self, text: &str, x: f32, y: f32, size: f32) -> Result<()>;

    /// Finish the current page.
    fn end_page(&mut self) -> Result<()>;
}
