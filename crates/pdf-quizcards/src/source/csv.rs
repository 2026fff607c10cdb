use crate::content::{CodeBlock, ContentBlock, ContentItem, Paragraph, TextRole};
use crate::deck::{Cover, QuizDocument, QuizItem};
use crate::types::Result;

/// Parse a `question,answer` CSV table. The cover only carries `title`.
///
/// Columns are found by header name and fall back to the first two columns.
/// Rows with fewer than two fields are skipped.
pub fn parse_csv(content: &str, title: &str) -> Result<QuizDocument> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let question_col = column("question").unwrap_or(0);
    let answer_col = column("answer").unwrap_or(1);

    let mut items = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() < 2 {
            log::debug!("skipping short CSV row {:?}", record.position());
            continue;
        }
        let (Some(question), Some(answer)) = (record.get(question_col), record.get(answer_col))
        else {
            continue;
        };

        items.push(QuizItem {
            question: ContentBlock::new(vec![ContentItem::Text(Paragraph::plain(
                question.trim(),
                TextRole::Body,
            ))]),
            answer: ContentBlock::new(vec![ContentItem::Code(CodeBlock::new(answer))]),
        });
    }

    Ok(QuizDocument {
        cover: Cover {
            title: title.to_string(),
            paragraphs: Vec::new(),
        },
        items,
    })
}
