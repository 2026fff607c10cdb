//! Turning a quiz document into card pairs

use crate::card::{CardConfig, CardPair};
use crate::content::{ContentBlock, ContentItem, Paragraph, TextRole, TextSpan};

/// Title page of a deck
#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    pub title: String,
    /// Each paragraph is a list of rich-text spans
    pub paragraphs: Vec<Vec<TextSpan>>,
}

/// One question with its answer
#[derive(Debug, Clone, PartialEq)]
pub struct QuizItem {
    pub question: ContentBlock,
    pub answer: ContentBlock,
}

/// A parsed source document
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDocument {
    pub cover: Cover,
    pub items: Vec<QuizItem>,
}

impl QuizDocument {
    /// Cards the deck will contain, cover included
    pub fn card_count(&self) -> usize {
        self.items.len() + 1
    }
}

/// Content of the cover's front face
pub fn cover_block(cover: &Cover) -> ContentBlock {
    let mut block = ContentBlock::new(vec![ContentItem::Text(Paragraph::plain(
        cover.title.clone(),
        TextRole::Title,
    ))]);
    for spans in &cover.paragraphs {
        block.push(ContentItem::Text(Paragraph::new(spans.clone(), TextRole::Body)));
    }
    block
}

/// Front face of `item`
pub fn question_block(item: &QuizItem) -> ContentBlock {
    let mut block = ContentBlock::new(vec![ContentItem::Text(Paragraph::plain(
        "Question:",
        TextRole::Fine,
    ))]);
    for content in item.question.items() {
        block.push(content.clone());
    }
    block
}

/// Back face of item `number` (1-based)
pub fn answer_block(item: &QuizItem, number: usize) -> ContentBlock {
    let mut block = ContentBlock::new(vec![ContentItem::Text(Paragraph::plain(
        format!("Answer {number}:"),
        TextRole::Fine,
    ))]);
    for content in item.answer.items() {
        block.push(content.clone());
    }
    block
}

/// Build the ordered card pairs for a deck.
///
/// Pair 0 is the cover with an empty back. Pair `i` (1-based) carries
/// question `i` on the front and answer `i` on the back. The order is the
/// order the imposer consumes and must not be changed afterwards.
pub fn build_deck(cover: &Cover, items: &[QuizItem], config: &CardConfig) -> Vec<CardPair> {
    let mut pairs = Vec::with_capacity(items.len() + 1);
    pairs.push(CardPair::new(cover_block(cover), ContentBlock::empty(), *config));

    for (i, item) in items.iter().enumerate() {
        pairs.push(CardPair::new(
            question_block(item),
            answer_block(item, i + 1),
            *config,
        ));
    }

    log::debug!("built deck of {} cards", pairs.len());
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CodeBlock;
    use crate::types::{CardMargins, Dimension};

    fn config() -> CardConfig {
        CardConfig {
            size: Dimension::new(258.0, 167.0),
            margins: CardMargins::default(),
            frame: false,
        }
    }

    fn item(q: &str, a: &str) -> QuizItem {
        QuizItem {
            question: ContentBlock::new(vec![ContentItem::Text(Paragraph::plain(q, TextRole::Body))]),
            answer: ContentBlock::new(vec![ContentItem::Code(CodeBlock::new(a))]),
        }
    }

    fn first_text(block: &ContentBlock) -> String {
        match &block.items()[0] {
            ContentItem::Text(p) => p.text(),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_cover_pair_has_empty_back() {
        let cover = Cover {
            title: "100 numpy exercises".to_string(),
            paragraphs: vec![vec![TextSpan::plain("A collection of exercises.")]],
        };
        let pairs = build_deck(&cover, &[], &config());

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].front.content.len(), 2);
        assert_eq!(first_text(&pairs[0].front.content), "100 numpy exercises");
        assert!(pairs[0].back.content.is_empty());
    }

    #[test]
    fn test_items_pair_question_with_answer() {
        let cover = Cover {
            title: "Deck".to_string(),
            paragraphs: vec![],
        };
        let items: Vec<QuizItem> = (1..=5)
            .map(|n| item(&format!("{n}. Question {n}"), &format!("answer_{n}()")))
            .collect();
        let pairs = build_deck(&cover, &items, &config());

        assert_eq!(pairs.len(), 6);
        for (n, pair) in pairs.iter().enumerate().skip(1) {
            assert_eq!(first_text(&pair.front.content), "Question:");
            assert_eq!(first_text(&pair.back.content), format!("Answer {n}:"));
            assert_eq!(
                pair.front.content.items()[1],
                ContentItem::Text(Paragraph::plain(format!("{n}. Question {n}"), TextRole::Body))
            );
            assert_eq!(
                pair.back.content.items()[1],
                ContentItem::Code(CodeBlock::new(format!("answer_{n}()")))
            );
        }
    }
}
