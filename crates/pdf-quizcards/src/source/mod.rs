//! Document sources
//!
//! A source turns a file into a [`QuizDocument`]: a cover and an ordered list
//! of question/answer items. Files are read with `tokio::fs` and parsed on the
//! blocking pool.

mod csv;
mod markdown;

pub use self::csv::parse_csv;
pub use self::markdown::parse_markdown;

use crate::deck::QuizDocument;
use crate::types::{QuizcardError, Result};
use std::path::Path;

/// Recognised input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Markdown,
    Csv,
}

impl SourceFormat {
    /// Format for a path, judged by its extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(SourceFormat::Markdown),
            "csv" => Some(SourceFormat::Csv),
            _ => None,
        }
    }
}

/// Whether [`load_document`] knows how to read `path`
pub fn is_supported(path: &Path) -> bool {
    SourceFormat::from_path(path).is_some()
}

/// Load and parse a source document
pub async fn load_document(path: impl AsRef<Path>) -> Result<QuizDocument> {
    let path = path.as_ref().to_owned();
    let format = SourceFormat::from_path(&path)
        .ok_or_else(|| QuizcardError::UnsupportedInput(path.clone()))?;

    let contents = tokio::fs::read_to_string(&path).await?;

    let doc = tokio::task::spawn_blocking(move || match format {
        SourceFormat::Markdown => {
            let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
            parse_markdown(&contents, base_dir)
        }
        SourceFormat::Csv => {
            let title = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            parse_csv(&contents, &title)
        }
    })
    .await??;

    Ok(doc)
}
