//! Reflowing content items against a width
//!
//! Paragraphs wrap greedily on whitespace, code blocks keep their own line
//! breaks, and images are scaled to the full width. Anything wider than the
//! available width is broken at character boundaries, never cut off.

use crate::constants::TAB_WIDTH;
use crate::content::{CodeBlock, ContentItem, ImageItem, Paragraph, SpanKind, TextRole};
use crate::style::{Alignment, BuiltinFont, Color, StyleConfig, TextStyle};

use super::{ImageLayout, LaidOutItem, TextLayout, TextLine, TextRun};

/// Lay out one content item against `width` points.
pub fn layout_item(item: &ContentItem, width: f32, style: &StyleConfig) -> LaidOutItem {
    match item {
        ContentItem::Text(paragraph) => LaidOutItem::Text(layout_paragraph(paragraph, width, style)),
        ContentItem::Code(code) => LaidOutItem::Text(layout_code(code, width, style)),
        ContentItem::Image(image) => LaidOutItem::Image(layout_image(image, width)),
    }
}

/// Natural height of `item` when laid out against `width`.
pub fn measure_item(item: &ContentItem, width: f32, style: &StyleConfig) -> f32 {
    layout_item(item, width, style).height()
}

// =============================================================================
// Paragraphs
// =============================================================================

/// A word with the style of the span it came from
struct Word {
    text: String,
    font: BuiltinFont,
    size: f32,
    color: Color,
    /// Whitespace separated this word from the previous one
    space_before: bool,
}

fn text_style(role: TextRole, style: &StyleConfig) -> &TextStyle {
    match role {
        TextRole::Title => &style.title,
        TextRole::Body => &style.body,
        TextRole::Fine => &style.fine,
    }
}

fn split_words(paragraph: &Paragraph, style: &StyleConfig) -> Vec<Word> {
    let base = text_style(paragraph.role, style);
    let mut words = Vec::new();
    let mut pending_space = false;

    for span in &paragraph.spans {
        let (font, color) = match span.kind {
            SpanKind::Plain => (base.font, style.text_color),
            SpanKind::Bold => (base.bold_font, style.text_color),
            SpanKind::Code => (style.code.font, style.text_color),
            SpanKind::Link => (base.font, style.link_color),
        };
        let mut current = String::new();
        for ch in span.text.chars() {
            if !ch.is_whitespace() {
                current.push(ch);
                continue;
            }
            if !current.is_empty() {
                words.push(Word {
                    text: std::mem::take(&mut current),
                    font,
                    size: base.size_pt,
                    color,
                    space_before: pending_space,
                });
            }
            pending_space = true;
        }
        if !current.is_empty() {
            words.push(Word {
                text: current,
                font,
                size: base.size_pt,
                color,
                space_before: pending_space,
            });
            pending_space = false;
        }
    }
    words
}

struct LineBuilder {
    width: f32,
    lines: Vec<TextLine>,
    current: TextLine,
}

impl LineBuilder {
    fn new(width: f32) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: TextLine::default(),
        }
    }

    fn break_line(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line);
    }

    /// Append `text` at the end of the current line, merging with the last
    /// run when the style matches.
    fn append(&mut self, text: &str, gap: &str, font: BuiltinFont, size: f32, color: Color) {
        let added = font.text_width(gap, size) + font.text_width(text, size);
        let merge = self
            .current
            .runs
            .last()
            .is_some_and(|last| last.font == font && last.size == size && last.color == color);

        if merge {
            if let Some(last) = self.current.runs.last_mut() {
                last.text.push_str(gap);
                last.text.push_str(text);
                last.width += added;
            }
        } else {
            self.current.runs.push(TextRun {
                text: format!("{gap}{text}"),
                font,
                size,
                color,
                x: self.current.width,
                width: added,
            });
        }
        self.current.width += added;
    }

    fn push_word(&mut self, word: &Word) {
        let word_width = word.font.text_width(&word.text, word.size);
        let gap = if word.space_before && !self.current.runs.is_empty() {
            " "
        } else {
            ""
        };
        let gap_width = word.font.text_width(gap, word.size);

        if self.current.width + gap_width + word_width <= self.width {
            self.append(&word.text, gap, word.font, word.size, word.color);
            return;
        }

        if !self.current.runs.is_empty() {
            self.break_line();
        }

        if word_width <= self.width {
            self.append(&word.text, "", word.font, word.size, word.color);
            return;
        }

        // Longer than a whole line: break between characters
        for chunk in break_chars(&word.text, word.font, word.size, self.width) {
            if !self.current.runs.is_empty() {
                self.break_line();
            }
            self.append(&chunk, "", word.font, word.size, word.color);
        }
    }

    fn finish(mut self) -> Vec<TextLine> {
        if !self.current.runs.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

/// Split `text` into chunks no wider than `width`; every chunk holds at
/// least one character.
fn break_chars(text: &str, font: BuiltinFont, size: f32, width: f32) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;
    for ch in text.chars() {
        let w = font.glyph_width(ch) * size;
        if !current.is_empty() && current_width + w > width {
            chunks.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current.push(ch);
        current_width += w;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn align_lines(lines: &mut [TextLine], alignment: Alignment, width: f32) {
    if alignment == Alignment::Center {
        for line in lines {
            line.x_offset = ((width - line.width) / 2.0).max(0.0);
        }
    }
}

/// Wrap a paragraph into lines no wider than `width`.
pub fn layout_paragraph(paragraph: &Paragraph, width: f32, style: &StyleConfig) -> TextLayout {
    let base = text_style(paragraph.role, style);
    let mut builder = LineBuilder::new(width);
    for word in split_words(paragraph, style) {
        builder.push_word(&word);
    }
    let mut lines = builder.finish();
    align_lines(&mut lines, base.alignment, width);

    TextLayout {
        lines,
        font_size: base.size_pt,
        leading: base.leading_pt,
    }
}

// =============================================================================
// Code Blocks
// =============================================================================

/// Lay out preformatted text, hard-wrapping lines wider than `width`.
pub fn layout_code(code: &CodeBlock, width: f32, style: &StyleConfig) -> TextLayout {
    let code_style = &style.code;
    let text = code.text.trim_end_matches(['\n', '\r']);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let expanded = raw.replace('\t', &" ".repeat(TAB_WIDTH));
        let expanded = expanded.trim_end();
        if expanded.is_empty() {
            lines.push(TextLine::default());
            continue;
        }
        for chunk in break_chars(expanded, code_style.font, code_style.size_pt, width) {
            let chunk_width = code_style.font.text_width(&chunk, code_style.size_pt);
            lines.push(TextLine {
                runs: vec![TextRun {
                    text: chunk,
                    font: code_style.font,
                    size: code_style.size_pt,
                    color: style.text_color,
                    x: 0.0,
                    width: chunk_width,
                }],
                x_offset: 0.0,
                width: chunk_width,
            });
        }
    }

    TextLayout {
        lines,
        font_size: code_style.size_pt,
        leading: code_style.leading_pt,
    }
}

// =============================================================================
// Images
// =============================================================================

/// Scale an image to `width`, preserving its aspect ratio.
pub fn layout_image(image: &ImageItem, width: f32) -> ImageLayout {
    ImageLayout {
        path: image.path.clone(),
        width,
        height: width * image.aspect(),
    }
}
