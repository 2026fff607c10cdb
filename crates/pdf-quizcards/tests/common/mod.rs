#![allow(dead_code)]

use pdf_quizcards::layout::{LaidOutItem, Rect};
use pdf_quizcards::{
    CodeBlock, Color, ContentBlock, ContentItem, Cover, Dimension, PageSink, Paragraph,
    QuizDocument, QuizItem, Result, TextRole, TextSpan,
};

/// One recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BeginPage(Dimension),
    Item {
        x: f32,
        top: f32,
        scale: f32,
        /// Natural height of the laid-out item
        height: f32,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Label {
        text: String,
        x: f32,
        y: f32,
    },
    EndPage,
}

/// Page sink that only remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    pub fn pages(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::EndPage))
            .count()
    }

    /// Events of the `n`th page, without the begin/end markers
    pub fn page(&self, n: usize) -> Vec<Event> {
        self.events
            .split(|e| matches!(e, Event::EndPage))
            .nth(n)
            .map(|events| {
                events
                    .iter()
                    .filter(|e| !matches!(e, Event::BeginPage(_)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl PageSink for RecordingSink {
    fn begin_page(&mut self, size: Dimension) -> Result<()> {
        self.events.push(Event::BeginPage(size));
        Ok(())
    }

    fn draw_item(&mut self, item: &LaidOutItem, x: f32, top: f32, scale: f32) -> Result<()> {
        self.events.push(Event::Item {
            x,
            top,
            scale,
            height: item.height(),
        });
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, _line_width: f32) -> Result<()> {
        self.events.push(Event::Rect { rect, color });
        Ok(())
    }

    fn draw_label(&mut self, text: &str, x: f32, y: f32, _size: f32) -> Result<()> {
        self.events.push(Event::Label {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        self.events.push(Event::EndPage);
        Ok(())
    }
}

/// A document with `n` short questions
pub fn sample_document(n: usize) -> QuizDocument {
    QuizDocument {
        cover: Cover {
            title: "Sample quiz".to_string(),
            paragraphs: vec![vec![TextSpan::plain("A few questions to check the layout.")]],
        },
        items: (1..=n)
            .map(|i| QuizItem {
                question: ContentBlock::new(vec![ContentItem::Text(Paragraph::plain(
                    format!("{i}. What does snippet {i} print?"),
                    TextRole::Body,
                ))]),
                answer: ContentBlock::new(vec![ContentItem::Code(CodeBlock::new(format!(
                    "print({i})\n"
                )))]),
            })
            .collect(),
    }
}
