//! Card content model
//!
//! Content items have no size of their own until they are laid out against
//! a width (see `layout::text`).

use std::path::PathBuf;

/// How a run of text is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    /// Inline code, set in the code font
    Code,
    /// A URL, set in the link colour
    Link,
}

/// A run of uniformly styled text
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }
}

/// Which `TextStyle` of the `StyleConfig` a paragraph uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Body,
    Fine,
}

/// Flowing rich text, wrapped on whitespace
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub spans: Vec<TextSpan>,
    pub role: TextRole,
}

impl Paragraph {
    pub fn new(spans: Vec<TextSpan>, role: TextRole) -> Self {
        Self { spans, role }
    }

    /// A single plain span
    pub fn plain(text: impl Into<String>, role: TextRole) -> Self {
        Self::new(vec![TextSpan::plain(text)], role)
    }

    /// Concatenated text of all spans
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Preformatted text: line breaks are kept, nothing is reflowed
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub text: String,
}

impl CodeBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A raster image stored on disk
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    pub path: PathBuf,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl ImageItem {
    /// Height/width ratio
    pub fn aspect(&self) -> f32 {
        if self.pixel_width == 0 {
            return 0.0;
        }
        self.pixel_height as f32 / self.pixel_width as f32
    }
}

/// One renderable item on a card face
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Text(Paragraph),
    Code(CodeBlock),
    Image(ImageItem),
}

/// Ordered content of one card face
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentBlock(pub Vec<ContentItem>);

impl ContentBlock {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self(items)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, item: ContentItem) {
        self.0.push(item);
    }
}

impl FromIterator<ContentItem> for ContentBlock {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
