//! Sheet rendering for imposed decks

use super::impose;
use crate::card::CardPair;
use crate::deck::{QuizDocument, build_deck};
use crate::layout::SheetGroup;
use crate::options::QuizcardOptions;
use crate::render::{PageSink, PdfSink};
use crate::types::*;
use lopdf::Document;

/// Impose `pairs` and draw every sheet group through `sink`, one page per
/// group in group order.
///
/// Returns the sheet groups that were drawn.
pub fn render_deck<S: PageSink + ?Sized>(
    pairs: &[CardPair],
    options: &QuizcardOptions,
    sink: &mut S,
) -> Result<Vec<SheetGroup>> {
    let grid = options.grid()?;
    let groups = impose(pairs, &grid, options.size_labels)?;
    let style = &options.style;

    for group in &groups {
        sink.begin_page(grid.page)?;

        if let Some(label) = &group.label {
            sink.draw_label(&label.text, label.x, label.y, style.label_size_pt)?;
        }

        for placement in &group.placements {
            let face = pairs[placement.pair_index].face(placement.face_index);
            face.render(sink, placement.x, placement.y, placement.mirrored, style)?;
        }

        sink.end_page()?;
        log::debug!(
            "rendered sheet group {} ({:?}, {} faces)",
            group.index,
            group.side,
            group.len()
        );
    }

    Ok(groups)
}

/// Build and render a whole document into a lopdf `Document`.
pub fn render_document(doc: &QuizDocument, options: &QuizcardOptions) -> Result<Document> {
    options.validate()?;

    let pairs = build_deck(&doc.cover, &doc.items, &options.card_config());
    let mut sink = PdfSink::new();
    let groups = render_deck(&pairs, options, &mut sink)?;

    log::info!(
        "\"{}\": {} cards on {} pages",
        doc.cover.title,
        pairs.len(),
        groups.len()
    );
    sink.finish()
}

/// Render a document and serialize it to PDF bytes.
pub fn generate_pdf_bytes(doc: &QuizDocument, options: &QuizcardOptions) -> Result<Vec<u8>> {
    let mut pdf = render_document(doc, options)?;
    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)?;
    Ok(buffer)
}
