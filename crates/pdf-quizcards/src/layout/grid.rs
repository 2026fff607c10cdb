//! Grid fitting
//!
//! Decides how many cards fit on a page, optionally turning the page by 90°,
//! and maps a face's position within its sheet group to a grid cell.

use crate::types::{Dimension, QuizcardError, Result};

use super::{GridFit, GridPosition, SheetSide};

/// Usable page margins in points, as consumed by [`fit_grid`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageMargins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

// =============================================================================
// Grid Fitting
// =============================================================================

/// Maximize the number of cards on a page, perhaps turning the page by 90°.
///
/// The upright count is `floor(usable_w / card_w) * floor(usable_h / card_h)`.
/// The turned count lays the card across the other axis. With `allow_rotate`
/// the page is turned when that strictly increases the yield.
///
/// After that, if rotation is allowed and the resulting page is portrait
/// while the card is landscape, `cols` and `rows` are exchanged once more so
/// cards stack along their own long axis. This is a visual heuristic, not a
/// yield optimisation, and it can produce a grid wider than the usable area.
///
/// # Errors
/// `InvalidGeometry` when any extent is non-positive or when the card does
/// not fit the usable area at all.
pub fn fit_grid(
    card: Dimension,
    page: Dimension,
    margins: PageMargins,
    allow_rotate: bool,
) -> Result<GridFit> {
    if card.width <= 0.0 || card.height <= 0.0 {
        return Err(QuizcardError::InvalidGeometry(format!(
            "card size must be positive, got {} x {} pt",
            card.width, card.height
        )));
    }
    if page.width <= 0.0 || page.height <= 0.0 {
        return Err(QuizcardError::InvalidGeometry(format!(
            "page size must be positive, got {} x {} pt",
            page.width, page.height
        )));
    }

    let usable_w = page.width - margins.left - margins.right;
    let usable_h = page.height - margins.top - margins.bottom;

    let upright = (cells(usable_w, card.width), cells(usable_h, card.height));
    let turned = (cells(usable_w, card.height), cells(usable_h, card.width));

    let mut page_out = page;
    let (mut cols, mut rows) = upright;
    let mut rotated = false;

    if allow_rotate && turned.0 * turned.1 > upright.0 * upright.1 {
        // Turning the page makes the old height the new width
        page_out = page.swapped();
        cols = turned.1;
        rows = turned.0;
        rotated = true;
    }

    if allow_rotate && page_out.is_portrait() && card.is_landscape() {
        std::mem::swap(&mut cols, &mut rows);
    }

    if cols == 0 || rows == 0 {
        return Err(QuizcardError::InvalidGeometry(format!(
            "card {} x {} pt does not fit usable page area {} x {} pt",
            card.width, card.height, usable_w, usable_h
        )));
    }

    log::debug!(
        "grid {}x{} on {}x{} pt page (rotated: {})",
        cols,
        rows,
        page_out.width,
        page_out.height,
        rotated
    );

    Ok(GridFit {
        page: page_out,
        card,
        cols,
        rows,
        rotated,
    })
}

/// Whole cards along one axis
fn cells(usable: f32, card: f32) -> usize {
    if usable <= 0.0 {
        return 0;
    }
    (usable / card).floor() as usize
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Grid cell for the `slot`-th face of a sheet group.
///
/// Cells fill row by row starting at the top. Front sides run left to right,
/// back sides right to left so that a card's back lands behind its front
/// once the sheet is flipped around its vertical axis.
pub fn cell_for_slot(grid: &GridFit, slot: usize, side: SheetSide) -> GridPosition {
    let slot = slot % grid.capacity();
    let row = slot / grid.cols;
    let col = slot % grid.cols;
    let col = match side {
        SheetSide::Front => col,
        SheetSide::Back => grid.cols - 1 - col,
    };
    GridPosition::new(row, col)
}

/// Bottom-left corner of a cell in page coordinates (origin bottom-left).
pub fn cell_origin(grid: &GridFit, pos: GridPosition) -> (f32, f32) {
    let (x0, y0) = grid.grid_origin();
    let x = x0 + pos.col as f32 * grid.card.width;
    // Row 0 is at the top, so invert the y calculation
    let y = y0 + (grid.rows - pos.row - 1) as f32 * grid.card.height;
    (x, y)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::mm_to_pt;

    fn mm(w: f32, h: f32) -> Dimension {
        Dimension::new(mm_to_pt(w), mm_to_pt(h))
    }

    fn default_margins() -> PageMargins {
        PageMargins {
            left: mm_to_pt(7.21),
            right: mm_to_pt(7.21),
            top: mm_to_pt(15.1),
            bottom: mm_to_pt(15.1),
        }
    }

    #[test]
    fn test_business_cards_on_landscape_a4() {
        let grid = fit_grid(mm(91.0, 59.0), mm(297.0, 210.0), default_margins(), true).unwrap();

        // (297 - 14.42) / 91 = 3.1, (210 - 30.2) / 59 = 3.05
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.rows, 3);
        assert!(!grid.rotated);
        assert_eq!(grid.page, mm(297.0, 210.0));
    }

    #[test]
    fn test_no_rotation_is_plain_division() {
        let grid = fit_grid(
            Dimension::new(50.0, 30.0),
            Dimension::new(170.0, 100.0),
            PageMargins::default(),
            false,
        )
        .unwrap();
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.capacity(), 9);
    }

    #[test]
    fn test_rotation_picks_higher_yield() {
        // Upright: 1 x 5 = 5, turned: 2 x 3 = 6
        let card = Dimension::new(60.0, 40.0);
        let page = Dimension::new(100.0, 210.0);

        let upright = fit_grid(card, page, PageMargins::default(), false).unwrap();
        assert_eq!((upright.cols, upright.rows), (1, 5));

        let grid = fit_grid(card, page, PageMargins::default(), true).unwrap();
        assert!(grid.rotated);
        assert_eq!(grid.page, Dimension::new(210.0, 100.0));
        assert_eq!((grid.cols, grid.rows), (3, 2));
        assert!(grid.capacity() >= upright.capacity());
    }

    #[test]
    fn test_portrait_page_landscape_card_swaps_axes() {
        // Upright on portrait A4: 2 x 4; turned only gives 3 x 2
        let grid = fit_grid(mm(91.0, 59.0), mm(210.0, 297.0), default_margins(), true).unwrap();
        assert!(!grid.rotated);
        assert_eq!((grid.cols, grid.rows), (4, 2));

        let plain = fit_grid(mm(91.0, 59.0), mm(210.0, 297.0), default_margins(), false).unwrap();
        assert_eq!((plain.cols, plain.rows), (2, 4));
    }

    #[test]
    fn test_card_larger_than_page() {
        let result = fit_grid(
            Dimension::new(500.0, 500.0),
            Dimension::new(200.0, 300.0),
            PageMargins::default(),
            true,
        );
        assert!(matches!(result, Err(QuizcardError::InvalidGeometry(_))));
    }

    #[test]
    fn test_margins_eat_the_page() {
        let margins = PageMargins {
            left: 60.0,
            right: 60.0,
            top: 0.0,
            bottom: 0.0,
        };
        let result = fit_grid(
            Dimension::new(10.0, 10.0),
            Dimension::new(100.0, 100.0),
            margins,
            false,
        );
        assert!(matches!(result, Err(QuizcardError::InvalidGeometry(_))));
    }

    #[test]
    fn test_cell_for_slot_mirrors_back() {
        let grid = fit_grid(
            Dimension::new(50.0, 30.0),
            Dimension::new(170.0, 100.0),
            PageMargins::default(),
            false,
        )
        .unwrap();

        assert_eq!(cell_for_slot(&grid, 0, SheetSide::Front), GridPosition::new(0, 0));
        assert_eq!(cell_for_slot(&grid, 0, SheetSide::Back), GridPosition::new(0, 2));
        assert_eq!(cell_for_slot(&grid, 4, SheetSide::Front), GridPosition::new(1, 1));
        assert_eq!(cell_for_slot(&grid, 5, SheetSide::Back), GridPosition::new(1, 0));
    }

    #[test]
    fn test_cell_origin_centres_grid() {
        let grid = fit_grid(
            Dimension::new(50.0, 30.0),
            Dimension::new(170.0, 100.0),
            PageMargins::default(),
            false,
        )
        .unwrap();

        // Grid is 150 x 90 centred on 170 x 100
        let (x, y) = cell_origin(&grid, GridPosition::new(2, 0));
        assert_eq!((x, y), (10.0, 5.0));

        let (x, y) = cell_origin(&grid, GridPosition::new(0, 2));
        assert_eq!((x, y), (110.0, 65.0));
    }
}
