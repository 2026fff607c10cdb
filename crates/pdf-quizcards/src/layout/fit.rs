//! Fitting a content block into a bounded box
//!
//! Every item is reflowed against the box width. If the stacked height
//! exceeds the box, the whole block is scaled by one factor so it ends
//! exactly at the bottom edge. Nothing is ever clipped or dropped.

use crate::content::ContentBlock;
use crate::style::StyleConfig;
use crate::types::{QuizcardError, Result};

use super::{LaidOutItem, layout_item};

/// An item with its vertical offset below the top of the box, at scale 1
#[derive(Debug, Clone, PartialEq)]
pub struct FittedItem {
    pub item: LaidOutItem,
    pub offset: f32,
}

/// A content block laid out for one bounded box
#[derive(Debug, Clone, PartialEq)]
pub struct FittedBlock {
    pub items: Vec<FittedItem>,
    /// Stacked height at scale 1, spacing included
    pub natural_height: f32,
    /// Uniform factor applied to the whole block (1.0 when it fits)
    pub scale: f32,
    /// Height actually occupied once scaled
    pub drawn_height: f32,
}

impl FittedBlock {
    pub fn is_shrunk(&self) -> bool {
        self.scale < 1.0
    }
}

/// Lay out `block` for a box of `width` x `height` points.
///
/// Images are already scaled to the full width by the reflow, so the
/// shrink factor only compensates what still overflows.
///
/// # Errors
/// `InvalidGeometry` if either extent is non-positive.
pub fn fit_block(
    block: &ContentBlock,
    width: f32,
    height: f32,
    style: &StyleConfig,
) -> Result<FittedBlock> {
    if width <= 0.0 || height <= 0.0 {
        return Err(QuizcardError::InvalidGeometry(format!(
            "content area must be positive, got {} x {} pt",
            width, height
        )));
    }

    let mut items = Vec::with_capacity(block.len());
    let mut cursor = 0.0;
    for (idx, item) in block.items().iter().enumerate() {
        if idx > 0 {
            cursor += style.item_spacing_pt;
        }
        let laid = layout_item(item, width, style);
        let item_height = laid.height();
        items.push(FittedItem {
            item: laid,
            offset: cursor,
        });
        cursor += item_height;
    }
    let natural_height = cursor;

    let (scale, drawn_height) = if natural_height <= height {
        (1.0, natural_height)
    } else {
        (height / natural_height, height)
    };

    log::debug!(
        "fit {} items: natural {:.1} pt into {:.1} x {:.1} pt, scale {:.3}",
        items.len(),
        natural_height,
        width,
        height,
        scale
    );

    Ok(FittedBlock {
        items,
        natural_height,
        scale,
        drawn_height,
    })
}
