//! Card imposition - arranging card faces on duplex sheets
//!
//! This module orchestrates the imposition process:
//! 1. Fit the card grid to the page
//! 2. Split the face sequence into front and back sheet groups
//! 3. Render each group as one page through a `PageSink`
//! 4. Write the finished document next to its source

mod io;
mod sheet;

pub use io::{generate_pdf, make_cards_file, make_cards_files, FileOutcome};
pub use sheet::{generate_pdf_bytes, render_deck, render_document};

use crate::card::CardPair;
use crate::constants::{SIZE_LABEL_OFFSET, pt_to_mm};
use crate::layout::{
    GridFit, Placement, SheetGroup, SheetSide, SizeLabel, cell_for_slot, cell_origin,
};
use crate::types::{QuizcardError, Result};

/// Split a deck into sheet groups.
///
/// The flattened face sequence (front0, back0, front1, back1, ...) is cut into
/// chunks of `2 * capacity` faces. Each chunk yields a fronts group followed by
/// a backs group holding the same cards in the same order, so group `2k` and
/// group `2k + 1` print on the two sides of one physical sheet.
///
/// # Errors
/// `InvalidGeometry` when the grid holds no cards.
pub fn impose(pairs: &[CardPair], grid: &GridFit, size_labels: bool) -> Result<Vec<SheetGroup>> {
    let capacity = grid.capacity();
    if capacity == 0 {
        return Err(QuizcardError::InvalidGeometry(format!(
            "grid of {} x {} cells has no room for cards",
            grid.cols, grid.rows
        )));
    }

    let face_count = pairs.len() * 2;
    let mut groups = Vec::with_capacity(2 * face_count.div_ceil(2 * capacity));

    for chunk_start in (0..face_count).step_by(2 * capacity) {
        let chunk_end = (chunk_start + 2 * capacity).min(face_count);

        for side in [SheetSide::Front, SheetSide::Back] {
            let parity = match side {
                SheetSide::Front => 0,
                SheetSide::Back => 1,
            };
            let faces: Vec<usize> = (chunk_start..chunk_end)
                .filter(|i| i % 2 == parity)
                .collect();
            groups.push(build_group(groups.len(), side, &faces, grid, size_labels));
        }
    }

    log::debug!(
        "imposed {} faces into {} sheet groups of up to {} cards",
        face_count,
        groups.len(),
        capacity
    );
    Ok(groups)
}

fn build_group(
    index: usize,
    side: SheetSide,
    faces: &[usize],
    grid: &GridFit,
    size_labels: bool,
) -> SheetGroup {
    let mut placements = Vec::with_capacity(faces.len());
    let mut label = None;

    for (slot, &face_index) in faces.iter().enumerate() {
        let cell = cell_for_slot(grid, slot, side);
        let (x, y) = cell_origin(grid, cell);

        // Every group starts a new sheet side, so only slot 0 gets the label
        if size_labels && slot % grid.capacity() == 0 {
            label = Some(SizeLabel {
                text: size_label_text(grid),
                x,
                y: y + grid.card.height + SIZE_LABEL_OFFSET,
            });
        }

        placements.push(Placement {
            face_index,
            pair_index: face_index / 2,
            cell,
            x,
            y,
            mirrored: side.is_mirrored(),
        });
    }

    SheetGroup {
        index,
        side,
        placements,
        label,
    }
}

/// "paper: 297 x 210 mm, cards:  91 x  59 mm"
pub fn size_label_text(grid: &GridFit) -> String {
    format!(
        "paper: {:3.0} x {:3.0} mm, cards: {:3.0} x {:3.0} mm",
        pt_to_mm(grid.page.width),
        pt_to_mm(grid.page.height),
        pt_to_mm(grid.card.width),
        pt_to_mm(grid.card.height)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardConfig;
    use crate::content::ContentBlock;
    use crate::layout::GridPosition;
    use crate::types::{CardMargins, Dimension};

    fn grid(cols: usize, rows: usize) -> GridFit {
        GridFit {
            page: Dimension::new(400.0, 300.0),
            card: Dimension::new(100.0, 60.0),
            cols,
            rows,
            rotated: false,
        }
    }

    fn deck(n: usize) -> Vec<CardPair> {
        let config = CardConfig {
            size: Dimension::new(100.0, 60.0),
            margins: CardMargins::default(),
            frame: false,
        };
        (0..n)
            .map(|_| CardPair::new(ContentBlock::empty(), ContentBlock::empty(), config))
            .collect()
    }

    #[test]
    fn test_empty_deck_has_no_groups() {
        let groups = impose(&[], &grid(3, 2), true).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_zero_capacity_fails() {
        let result = impose(&deck(2), &grid(0, 2), true);
        assert!(matches!(result, Err(QuizcardError::InvalidGeometry(_))));
    }

    #[test]
    fn test_groups_alternate_sides() {
        // 7 cards on a 2x2 grid: 4 + 3 cards, two sheets
        let groups = impose(&deck(7), &grid(2, 2), false).unwrap();
        let sides: Vec<SheetSide> = groups.iter().map(|g| g.side).collect();
        assert_eq!(
            sides,
            vec![SheetSide::Front, SheetSide::Back, SheetSide::Front, SheetSide::Back]
        );
        let lens: Vec<usize> = groups.iter().map(SheetGroup::len).collect();
        assert_eq!(lens, vec![4, 4, 3, 3]);
        assert!(groups.iter().enumerate().all(|(i, g)| g.index == i));
    }

    #[test]
    fn test_back_group_runs_right_to_left() {
        let groups = impose(&deck(3), &grid(3, 1), false).unwrap();
        let fronts: Vec<usize> = groups[0].placements.iter().map(|p| p.cell.col).collect();
        let backs: Vec<usize> = groups[1].placements.iter().map(|p| p.cell.col).collect();
        assert_eq!(fronts, vec![0, 1, 2]);
        assert_eq!(backs, vec![2, 1, 0]);
        assert!(groups[1].placements.iter().all(|p| p.mirrored));
        assert!(groups[0].placements.iter().all(|p| !p.mirrored));
    }

    #[test]
    fn test_rows_fill_from_the_top() {
        let groups = impose(&deck(3), &grid(2, 2), false).unwrap();
        let front = &groups[0];
        assert_eq!(front.placements[0].cell, GridPosition::new(0, 0));
        assert_eq!(front.placements[2].cell, GridPosition::new(1, 0));
        // Top row sits higher on the page than the second row
        assert!(front.placements[0].y > front.placements[2].y);
    }

    #[test]
    fn test_face_indices_pair_up() {
        let groups = impose(&deck(5), &grid(2, 1), false).unwrap();
        for pair in groups.chunks(2) {
            let fronts: Vec<usize> = pair[0].placements.iter().map(|p| p.face_index).collect();
            let backs: Vec<usize> = pair[1].placements.iter().map(|p| p.face_index).collect();
            assert!(fronts.iter().all(|i| i % 2 == 0));
            assert_eq!(backs, fronts.iter().map(|i| i + 1).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_label_sits_above_first_cell() {
        let g = grid(3, 2);
        let groups = impose(&deck(1), &g, true).unwrap();
        let label = groups[0].label.as_ref().unwrap();
        let first = groups[0].placements[0];
        assert_eq!(label.x, first.x);
        assert_eq!(label.y, first.y + g.card.height + SIZE_LABEL_OFFSET);

        // The back's first cell is the top-right one
        let back_label = groups[1].label.as_ref().unwrap();
        assert_eq!(back_label.x, groups[1].placements[0].x);
        assert_eq!(groups[1].placements[0].cell, GridPosition::new(0, 2));
    }

    #[test]
    fn test_size_label_text() {
        use crate::constants::mm_to_pt;
        let g = GridFit {
            page: Dimension::new(mm_to_pt(297.0), mm_to_pt(210.0)),
            card: Dimension::new(mm_to_pt(91.0), mm_to_pt(59.0)),
            cols: 3,
            rows: 3,
            rotated: false,
        };
        assert_eq!(
            size_label_text(&g),
            "paper: 297 x 210 mm, cards:  91 x  59 mm"
        );
    }
}
