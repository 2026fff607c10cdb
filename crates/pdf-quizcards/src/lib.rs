pub mod card;
pub mod constants;
pub mod content;
pub mod deck;
pub mod impose;
pub mod layout;
mod options;
pub mod render;
pub mod source;
mod stats;
pub mod style;
mod types;

pub use card::{CardConfig, CardFace, CardPair, FaceKind};
pub use content::*;
pub use deck::{Cover, QuizDocument, QuizItem, build_deck};
pub use impose::{
    FileOutcome, generate_pdf, generate_pdf_bytes, impose, make_cards_file, make_cards_files,
    render_deck, render_document,
};
pub use layout::{GridFit, PageMargins, SheetGroup, SheetSide, fit_grid};
pub use options::*;
pub use render::{PageSink, PdfSink};
pub use source::{SourceFormat, is_supported, load_document};
pub use stats::calculate_statistics;
pub use style::*;
pub use types::*;
