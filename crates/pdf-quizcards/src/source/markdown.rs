//! Markdown quiz documents
//!
//! The expected shape is a `# ` title, a few cover lines, then one
//! `#### <n>. <question>` heading per item followed by a fenced code block
//! holding the answer.

use crate::content::{
    CodeBlock, ContentBlock, ContentItem, ImageItem, Paragraph, SpanKind, TextRole, TextSpan,
};
use crate::deck::{Cover, QuizDocument, QuizItem};
use crate::types::{QuizcardError, Result};
use regex::Regex;
use std::path::Path;

struct Patterns {
    title: Regex,
    any_item_heading: Regex,
    question: Regex,
    fence: Regex,
    stars: Regex,
    inline: Regex,
    image: Regex,
}

impl Patterns {
    fn new() -> Result<Self> {
        Ok(Self {
            title: Regex::new(r"(?m)^#[ \t]+(.+)$")?,
            any_item_heading: Regex::new(r"(?m)^####[ \t]+")?,
            question: Regex::new(r"(?m)^####[ \t]+(\d+\.[ \t]+.*)$")?,
            fence: Regex::new(r"(?s)```[^\n]*\n(.*?)```")?,
            stars: Regex::new(r"★+☆*")?,
            inline: Regex::new(
                r"\*\*(?P<bold>.+?)\*\*|`(?P<code>[^`]+)`|<(?P<link>[^<>\s]+)>",
            )?,
            image: Regex::new(r"!\[(?P<alt>[^\]]*)\]\((?P<path>[^)\s]+)\)")?,
        })
    }
}

/// Parse a Markdown quiz. Image paths are resolved against `base_dir`.
///
/// # Errors
/// `MalformedDocument` when there is no `# ` title, `Image` when a referenced
/// image cannot be read.
pub fn parse_markdown(content: &str, base_dir: &Path) -> Result<QuizDocument> {
    let patterns = Patterns::new()?;
    let content = normalize(content, &patterns);

    let title_caps = patterns
        .title
        .captures(&content)
        .ok_or_else(|| QuizcardError::MalformedDocument("no `# ` title heading".to_string()))?;
    let title = title_caps[1].trim().to_string();
    let title_end = title_caps.get(0).map_or(0, |m| m.end());

    let cover_end = patterns
        .any_item_heading
        .find_at(&content, title_end)
        .map_or(content.len(), |m| m.start());
    let paragraphs = content[title_end..cover_end]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_spans(line, &patterns))
        .collect();

    let headings: Vec<(usize, usize, String)> = patterns
        .question
        .captures_iter(&content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), whole.end(), caps[1].trim().to_string()))
        })
        .filter(|(start, _, _)| *start >= title_end)
        .collect();

    let mut items = Vec::with_capacity(headings.len());
    for (i, (_, heading_end, question)) in headings.iter().enumerate() {
        let segment_end = headings.get(i + 1).map_or(content.len(), |next| next.0);
        let segment = &content[*heading_end..segment_end];

        let answer = match patterns.fence.captures(segment) {
            Some(caps) => ContentBlock::new(vec![ContentItem::Code(CodeBlock::new(&caps[1]))]),
            None => {
                log::warn!("question \"{question}\" has no answer block");
                ContentBlock::empty()
            }
        };

        items.push(QuizItem {
            question: parse_rich(question, base_dir, &patterns)?,
            answer,
        });
    }

    log::debug!("parsed \"{}\" with {} questions", title, items.len());
    Ok(QuizDocument {
        cover: Cover { title, paragraphs },
        items,
    })
}

/// Drop Markdown escapes and replace star ratings with plain asterisks
fn normalize(content: &str, patterns: &Patterns) -> String {
    let mut text = content.to_string();
    for ch in ["[", "]", "*"] {
        text = text.replace(&format!("\\{ch}"), ch);
    }
    let text = patterns
        .stars
        .replace_all(&text, |caps: &regex::Captures| {
            "*".repeat(caps[0].chars().filter(|&c| c == '★').count())
        });
    text.replace('☆', "")
}

/// Inline markup of one line: bold, code and links
fn parse_spans(text: &str, patterns: &Patterns) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in patterns.inline.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(TextSpan::plain(&text[last..whole.start()]));
        }
        let span = if let Some(m) = caps.name("bold") {
            TextSpan::new(m.as_str(), SpanKind::Bold)
        } else if let Some(m) = caps.name("code") {
            TextSpan::new(m.as_str(), SpanKind::Code)
        } else if let Some(m) = caps.name("link") {
            TextSpan::new(m.as_str(), SpanKind::Link)
        } else {
            TextSpan::plain(whole.as_str())
        };
        spans.push(span);
        last = whole.end();
    }

    if last < text.len() {
        spans.push(TextSpan::plain(&text[last..]));
    }
    spans
}

/// Question text, with `![alt](path)` pulled out into image items
fn parse_rich(text: &str, base_dir: &Path, patterns: &Patterns) -> Result<ContentBlock> {
    let mut block = ContentBlock::empty();
    let mut last = 0;

    for caps in patterns.image.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        push_paragraph(&mut block, &text[last..whole.start()], patterns);

        let path = base_dir.join(&caps["path"]);
        let (pixel_width, pixel_height) = image::image_dimensions(&path)?;
        block.push(ContentItem::Image(ImageItem {
            path,
            pixel_width,
            pixel_height,
        }));
        last = whole.end();
    }

    push_paragraph(&mut block, &text[last..], patterns);
    Ok(block)
}

fn push_paragraph(block: &mut ContentBlock, text: &str, patterns: &Patterns) {
    let text = text.trim();
    if !text.is_empty() {
        block.push(ContentItem::Text(Paragraph::new(
            parse_spans(text, patterns),
            TextRole::Body,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"# 100 numpy exercises

This is a collection of exercises.
See <https://github.com/rougier/numpy-100>

#### 1. Import the numpy package under the name `np` (★☆☆)
```python
import numpy as np
```

#### 2. Print the numpy version and the configuration (★☆☆)

```python
print(np.__version__)
np.show_config()
```

#### 3. Create a null vector of size 10 (★★☆)
"#;

    fn parse(content: &str) -> QuizDocument {
        parse_markdown(content, Path::new(".")).unwrap()
    }

    fn paragraph(block: &ContentBlock, i: usize) -> &Paragraph {
        match &block.items()[i] {
            ContentItem::Text(p) => p,
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_cover() {
        let doc = parse(SAMPLE);
        assert_eq!(doc.cover.title, "100 numpy exercises");
        assert_eq!(doc.cover.paragraphs.len(), 2);
        let link = &doc.cover.paragraphs[1];
        assert_eq!(link[0], TextSpan::plain("See "));
        assert_eq!(
            link[1],
            TextSpan::new("https://github.com/rougier/numpy-100", SpanKind::Link)
        );
    }

    #[test]
    fn test_items_and_answers() {
        let doc = parse(SAMPLE);
        assert_eq!(doc.items.len(), 3);

        let first = paragraph(&doc.items[0].question, 0);
        assert_eq!(first.text(), "1. Import the numpy package under the name np (*)");
        assert_eq!(first.spans[1], TextSpan::new("np", SpanKind::Code));
        assert_eq!(
            doc.items[0].answer.items(),
            &[ContentItem::Code(CodeBlock::new("import numpy as np\n"))]
        );

        assert_eq!(
            doc.items[1].answer.items(),
            &[ContentItem::Code(CodeBlock::new(
                "print(np.__version__)\nnp.show_config()\n"
            ))]
        );
    }

    #[test]
    fn test_question_without_answer_block() {
        let doc = parse(SAMPLE);
        assert_eq!(paragraph(&doc.items[2].question, 0).text(), "3. Create a null vector of size 10 (**)");
        assert!(doc.items[2].answer.is_empty());
    }

    #[test]
    fn test_answers_do_not_shift_to_earlier_questions() {
        let doc = parse("# T\n#### 1. one\n#### 2. two\n```\nanswer two\n```\n");
        assert_eq!(doc.items.len(), 2);
        assert!(doc.items[0].answer.is_empty());
        assert_eq!(
            doc.items[1].answer.items(),
            &[ContentItem::Code(CodeBlock::new("answer two\n"))]
        );
    }

    #[test]
    fn test_escapes_and_bold() {
        let doc = parse("# T\n#### 1. Use \\[a\\] with **care**\n```\nx\n```\n");
        let p = paragraph(&doc.items[0].question, 0);
        assert_eq!(p.text(), "1. Use [a] with care");
        assert_eq!(p.spans.last(), Some(&TextSpan::new("care", SpanKind::Bold)));
    }

    #[test]
    fn test_missing_title() {
        let result = parse_markdown("#### 1. q\n", Path::new("."));
        assert!(matches!(result, Err(QuizcardError::MalformedDocument(_))));
    }

    #[test]
    fn test_no_questions_is_not_an_error() {
        let doc = parse("# Only a cover\n\nSome words.\n");
        assert!(doc.items.is_empty());
        assert_eq!(doc.cover.paragraphs.len(), 1);
    }
}
