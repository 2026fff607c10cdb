//! Card faces
//!
//! A face owns its content block and knows how to fit and draw itself into
//! its card footprint. Back faces are drawn with left/right card margins
//! exchanged so asymmetric padding stays consistent once the sheet is flipped.

use crate::constants::mm_to_pt;
use crate::content::ContentBlock;
use crate::layout::{FittedBlock, Rect, fit_block};
use crate::render::PageSink;
use crate::style::StyleConfig;
use crate::types::{CardMargins, Dimension, QuizcardError, Result};

/// Settings shared by every face of a deck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardConfig {
    /// Card footprint in points
    pub size: Dimension,
    pub margins: CardMargins,
    /// Outline each face in the frame colour
    pub frame: bool,
}

impl CardConfig {
    /// Content area (width, height) in points.
    /// Mirroring moves the area, it never resizes it.
    pub fn content_size(&self) -> (f32, f32) {
        let m = &self.margins;
        (
            self.size.width - mm_to_pt(m.left_mm) - mm_to_pt(m.right_mm),
            self.size.height - mm_to_pt(m.top_mm) - mm_to_pt(m.bottom_mm),
        )
    }

    fn effective_margins(&self, mirrored: bool) -> CardMargins {
        if mirrored {
            self.margins.mirrored()
        } else {
            self.margins
        }
    }
}

/// Which side of a physical card a face is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Front,
    Back,
}

/// One printable side of one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardFace {
    pub kind: FaceKind,
    pub content: ContentBlock,
    pub config: CardConfig,
}

impl CardFace {
    pub fn new(kind: FaceKind, content: ContentBlock, config: CardConfig) -> Self {
        Self {
            kind,
            content,
            config,
        }
    }

    /// Lay out this face's content for its content area.
    pub fn fit(&self, style: &StyleConfig) -> Result<FittedBlock> {
        let (width, height) = self.config.content_size();
        if width <= 0.0 || height <= 0.0 {
            return Err(QuizcardError::InvalidGeometry(format!(
                "card margins leave no room on a {} x {} pt card",
                self.config.size.width, self.config.size.height
            )));
        }
        fit_block(&self.content, width, height, style)
    }

    /// Draw the face with its bottom-left corner at (`x`, `y`).
    ///
    /// Returns the height occupied by the content, which never exceeds the
    /// content area height.
    pub fn render<S: PageSink + ?Sized>(
        &self,
        sink: &mut S,
        x: f32,
        y: f32,
        mirrored: bool,
        style: &StyleConfig,
    ) -> Result<f32> {
        let fitted = self.fit(style)?;
        let margins = self.config.effective_margins(mirrored);

        let left = x + mm_to_pt(margins.left_mm);
        let top = y + self.config.size.height - mm_to_pt(margins.top_mm);

        for fitted_item in &fitted.items {
            let item_top = top - fitted_item.offset * fitted.scale;
            sink.draw_item(&fitted_item.item, left, item_top, fitted.scale)?;
        }

        if self.config.frame {
            let outline = Rect::new(x, y, self.config.size.width, self.config.size.height);
            sink.draw_rect(outline, style.frame_color, style.frame_line_width_pt)?;
        }

        Ok(fitted.drawn_height)
    }
}

/// The two faces of one physical card
#[derive(Debug, Clone, PartialEq)]
pub struct CardPair {
    pub front: CardFace,
    pub back: CardFace,
}

impl CardPair {
    pub fn new(front: ContentBlock, back: ContentBlock, config: CardConfig) -> Self {
        Self {
            front: CardFace::new(FaceKind::Front, front, config),
            back: CardFace::new(FaceKind::Back, back, config),
        }
    }

    /// Face by position in the flattened sequence (0 = front, 1 = back)
    pub fn face(&self, side: usize) -> &CardFace {
        if side % 2 == 0 { &self.front } else { &self.back }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, Paragraph, TextRole};

    fn config(frame: bool) -> CardConfig {
        CardConfig {
            size: Dimension::new(mm_to_pt(91.0), mm_to_pt(59.0)),
            margins: CardMargins {
                left_mm: 3.0,
                right_mm: 8.0,
                top_mm: 3.0,
                bottom_mm: 3.0,
            },
            frame,
        }
    }

    #[test]
    fn test_content_size_subtracts_margins() {
        let (w, h) = config(false).content_size();
        assert!((w - mm_to_pt(80.0)).abs() < 1e-3);
        assert!((h - mm_to_pt(53.0)).abs() < 1e-3);
    }

    #[test]
    fn test_mirroring_swaps_left_and_right() {
        let margins = config(false).effective_margins(true);
        assert_eq!(margins.left_mm, 8.0);
        assert_eq!(margins.right_mm, 3.0);
        assert_eq!(margins.top_mm, 3.0);
    }

    #[test]
    fn test_margins_larger_than_card() {
        let mut cfg = config(false);
        cfg.margins.left_mm = 50.0;
        cfg.margins.right_mm = 50.0;
        let face = CardFace::new(
            FaceKind::Front,
            ContentBlock::new(vec![ContentItem::Text(Paragraph::plain("x", TextRole::Body))]),
            cfg,
        );
        assert!(matches!(
            face.fit(&StyleConfig::default()),
            Err(QuizcardError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_pair_face_lookup() {
        let pair = CardPair::new(ContentBlock::empty(), ContentBlock::empty(), config(true));
        assert_eq!(pair.face(0).kind, FaceKind::Front);
        assert_eq!(pair.face(1).kind, FaceKind::Back);
    }
}
