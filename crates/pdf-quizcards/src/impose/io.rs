//! Document I/O for card decks

use super::sheet::generate_pdf_bytes;
use crate::deck::QuizDocument;
use crate::options::QuizcardOptions;
use crate::source::{is_supported, load_document};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Render a document and write the PDF to `path`
pub async fn generate_pdf(
    doc: &QuizDocument,
    options: &QuizcardOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let doc = doc.clone();
    let options = options.clone();
    let bytes = tokio::task::spawn_blocking(move || generate_pdf_bytes(&doc, &options)).await??;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Turn one source file into `<stem>.pdf` beside it and return the output path
pub async fn make_cards_file(input: impl AsRef<Path>, options: &QuizcardOptions) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = input.with_extension("pdf");

    let doc = load_document(input).await?;
    log::info!(
        "{}: {} questions",
        input.display(),
        doc.items.len()
    );
    generate_pdf(&doc, options, &output).await?;
    log::info!("wrote {}", output.display());
    Ok(output)
}

/// Result of processing one file of a batch
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<PathBuf>,
}

/// Process several files. Unrecognised extensions are skipped; a failing file
/// is reported in its outcome and does not stop the rest of the batch.
pub async fn make_cards_files(
    paths: &[impl AsRef<Path>],
    options: &QuizcardOptions,
) -> Vec<FileOutcome> {
    let mut outcomes = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if !is_supported(path) {
            log::debug!("skipping {}", path.display());
            continue;
        }

        let result = make_cards_file(path, options).await;
        if let Err(e) = &result {
            log::debug!("{} failed: {}", path.display(), e);
        }
        outcomes.push(FileOutcome {
            input: path.to_path_buf(),
            result,
        });
    }
    outcomes
}
