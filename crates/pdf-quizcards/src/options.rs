use crate::card::CardConfig;
use crate::constants::{DEFAULT_CARD_HEIGHT_MM, DEFAULT_CARD_WIDTH_MM, mm_to_pt};
use crate::layout::{GridFit, PageMargins, fit_grid};
use crate::style::StyleConfig;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete card sheet configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuizcardOptions {
    // Paper
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Card footprint
    pub card_width_mm: f32,
    pub card_height_mm: f32,

    // Margins
    pub sheet_margins: SheetMargins,
    pub card_margins: CardMargins,

    /// Allow turning the page when that fits more cards
    pub auto_rotate: bool,
    /// Outline every card face
    pub frame: bool,
    /// Print the paper/card size line above the first card of each page
    pub size_labels: bool,

    pub style: StyleConfig,
}

impl Default for QuizcardOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Landscape,
            card_width_mm: DEFAULT_CARD_WIDTH_MM,
            card_height_mm: DEFAULT_CARD_HEIGHT_MM,
            sheet_margins: SheetMargins::default(),
            card_margins: CardMargins::default(),
            auto_rotate: true,
            frame: true,
            size_labels: true,
            style: StyleConfig::default(),
        }
    }
}

impl QuizcardOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| QuizcardError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QuizcardError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !positive(self.card_width_mm) || !positive(self.card_height_mm) {
            return Err(QuizcardError::Config(format!(
                "Card size must be positive, got {} x {} mm",
                self.card_width_mm, self.card_height_mm
            )));
        }

        let (paper_w, paper_h) = self.paper_size.dimensions_mm();
        if !positive(paper_w) || !positive(paper_h) {
            return Err(QuizcardError::Config(format!(
                "Paper size must be positive, got {} x {} mm",
                paper_w, paper_h
            )));
        }

        let s = &self.sheet_margins;
        let c = &self.card_margins;
        let margins = [
            s.top_mm, s.bottom_mm, s.left_mm, s.right_mm, c.left_mm, c.right_mm, c.top_mm,
            c.bottom_mm,
        ];
        if margins.iter().any(|m| m.is_nan() || *m < 0.0) {
            return Err(QuizcardError::Config(
                "Margins must not be negative".to_string(),
            ));
        }

        for (name, text) in [
            ("title", &self.style.title),
            ("body", &self.style.body),
            ("fine", &self.style.fine),
            ("code", &self.style.code),
        ] {
            if !positive(text.size_pt) || !positive(text.leading_pt) {
                return Err(QuizcardError::Config(format!(
                    "The {name} text style needs a positive size and leading"
                )));
            }
        }

        Ok(())
    }

    /// Page size in points before any rotation decision
    pub fn page_dimension_pt(&self) -> Dimension {
        let (w, h) = self.paper_size.dimensions_with_orientation(self.orientation);
        Dimension::new(mm_to_pt(w), mm_to_pt(h))
    }

    pub fn card_dimension_pt(&self) -> Dimension {
        Dimension::new(mm_to_pt(self.card_width_mm), mm_to_pt(self.card_height_mm))
    }

    pub fn page_margins_pt(&self) -> PageMargins {
        PageMargins {
            left: mm_to_pt(self.sheet_margins.left_mm),
            right: mm_to_pt(self.sheet_margins.right_mm),
            top: mm_to_pt(self.sheet_margins.top_mm),
            bottom: mm_to_pt(self.sheet_margins.bottom_mm),
        }
    }

    pub fn card_config(&self) -> CardConfig {
        CardConfig {
            size: self.card_dimension_pt(),
            margins: self.card_margins,
            frame: self.frame,
        }
    }

    /// Fit the card grid for these options
    pub fn grid(&self) -> Result<GridFit> {
        fit_grid(
            self.card_dimension_pt(),
            self.page_dimension_pt(),
            self.page_margins_pt(),
            self.auto_rotate,
        )
    }
}

/// False for zero, negatives and NaN
fn positive(value: f32) -> bool {
    value > 0.0
}
