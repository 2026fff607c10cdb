//! Layout calculation modules for card sheets
//!
//! This module handles all the geometric calculations:
//! - Grid fitting (how many cards per page, page rotation)
//! - Content reflow against a card's width
//! - Shrink-to-fit of a face's content block

mod fit;
mod grid;
mod text;
mod types;

pub use fit::*;
pub use grid::*;
pub use text::*;
pub use types::*;
