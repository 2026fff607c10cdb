use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdf_quizcards::{
    DeckStatistics, Orientation, PaperSize, QuizcardOptions, calculate_statistics, is_supported,
    load_document, make_cards_files,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "quizcards",
    about = "Generate duplex quiz card sheets from Markdown or CSV files"
)]
struct Cli {
    /// Markdown (.md) or CSV (.csv) files; other files are ignored
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    paths: Vec<PathBuf>,

    /// Set verbose output
    #[arg(short = 'V', long)]
    verbose: bool,

    /// JSON options file, applied before the flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Card width in mm
    #[arg(long)]
    card_width_mm: Option<f32>,

    /// Card height in mm
    #[arg(long)]
    card_height_mm: Option<f32>,

    /// Never turn the page to fit more cards
    #[arg(long)]
    no_rotate: bool,

    /// Don't outline the cards
    #[arg(long)]
    no_frame: bool,

    /// Don't print the paper/card size line
    #[arg(long)]
    no_labels: bool,

    /// Show statistics only, don't generate PDFs
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::A6 => Self::A6,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl Cli {
    async fn options(&self) -> Result<QuizcardOptions> {
        let mut options = match &self.config {
            Some(path) => QuizcardOptions::load(path)
                .await
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => QuizcardOptions::default(),
        };

        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(width) = self.card_width_mm {
            options.card_width_mm = width;
        }
        if let Some(height) = self.card_height_mm {
            options.card_height_mm = height;
        }
        if self.no_rotate {
            options.auto_rotate = false;
        }
        if self.no_frame {
            options.frame = false;
        }
        if self.no_labels {
            options.size_labels = false;
        }

        options.validate()?;
        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn print_statistics(path: &Path, stats: &DeckStatistics) {
    println!("{}:", path.display());
    println!("  Cards: {} ({} faces)", stats.cards, stats.faces);
    println!(
        "  Grid: {} x {} ({} cards per sheet)",
        stats.columns, stats.rows, stats.cards_per_sheet
    );
    println!("  Paper sheets: {}", stats.paper_sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Empty slots: {}", stats.empty_slots);
}

async fn show_statistics(path: &Path, options: &QuizcardOptions) -> Result<()> {
    let doc = load_document(path).await?;
    let stats = calculate_statistics(doc.card_count(), options)?;
    print_statistics(path, &stats);
    Ok(())
}

/// Print statistics for every supported file and return the failure count
async fn run_statistics(paths: &[PathBuf], options: &QuizcardOptions) -> usize {
    let mut failures = 0;
    for path in paths {
        if !is_supported(path) {
            log::info!("ignoring {} (unsupported extension)", path.display());
            continue;
        }

        if let Err(e) = show_statistics(path, options)
            .await
            .with_context(|| format!("processing {}", path.display()))
        {
            log::error!("{e:#}");
            failures += 1;
        }
    }
    failures
}

/// Write a card PDF beside every supported file and return the failure count
async fn run_batch(paths: &[PathBuf], options: &QuizcardOptions) -> usize {
    let mut failures = 0;
    for outcome in make_cards_files(paths, options).await {
        match outcome.result {
            Ok(output) => println!("{} → {}", outcome.input.display(), output.display()),
            Err(e) => {
                log::error!("processing {}: {e}", outcome.input.display());
                failures += 1;
            }
        }
    }
    failures
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.options().await?;

    let failures = if cli.stats_only {
        run_statistics(&cli.paths, &options).await
    } else {
        run_batch(&cli.paths, &options).await
    };

    if failures > 0 {
        eprintln!("{failures} file(s) failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_batch_counts_failures_and_keeps_going() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.md");
        let good = dir.path().join("good.csv");
        let ignored = dir.path().join("notes.txt");
        std::fs::write(&broken, "no title\n").unwrap();
        std::fs::write(&good, "question,answer\nq,a\n").unwrap();
        std::fs::write(&ignored, "hello").unwrap();

        let failures = run_batch(&[broken, ignored, good], &QuizcardOptions::default()).await;
        assert_eq!(failures, 1);
        assert!(dir.path().join("good.pdf").exists());
        assert!(!dir.path().join("notes.pdf").exists());
    }
}
