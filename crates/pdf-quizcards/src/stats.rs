use crate::options::QuizcardOptions;
use crate::types::*;

/// Calculate sheet statistics for a deck of `card_count` cards (cover
/// included) without rendering anything.
pub fn calculate_statistics(
    card_count: usize,
    options: &QuizcardOptions,
) -> Result<DeckStatistics> {
    options.validate()?;
    let grid = options.grid()?;

    let cards_per_sheet = grid.capacity();
    let paper_sheets = card_count.div_ceil(cards_per_sheet);
    // Front and back of each sheet
    let output_pages = paper_sheets * 2;
    let empty_slots = paper_sheets * cards_per_sheet - card_count;

    Ok(DeckStatistics {
        cards: card_count,
        faces: card_count * 2,
        columns: grid.cols,
        rows: grid.rows,
        cards_per_sheet,
        paper_sheets,
        output_pages,
        empty_slots,
        page_width_pt: grid.page.width,
        page_height_pt: grid.page.height,
    })
}
