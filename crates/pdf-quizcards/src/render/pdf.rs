//! lopdf page sink

use super::PageSink;
use super::xobject::create_image_xobject;
use crate::constants::ASCENT_RATIO;
use crate::layout::{ImageLayout, LaidOutItem, Rect, TextLayout};
use crate::style::{BuiltinFont, Color};
use crate::types::{Dimension, QuizcardError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// A page being assembled
struct OpenPage {
    size: Dimension,
    ops: Vec<String>,
    xobjects: Dictionary,
    image_count: usize,
}

/// Writes sheet sides into an in-memory lopdf `Document`.
pub struct PdfSink {
    doc: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    fonts: BTreeMap<BuiltinFont, ObjectId>,
    image_cache: HashMap<PathBuf, ObjectId>,
    current: Option<OpenPage>,
}

impl Default for PdfSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSink {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_tree_id = doc.new_object_id();

        let mut fonts = BTreeMap::new();
        for font in BuiltinFont::ALL {
            let font_dict = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                ("BaseFont", Object::Name(font.base_font().as_bytes().to_vec())),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]);
            fonts.insert(font, doc.add_object(font_dict));
        }

        Self {
            doc,
            pages_tree_id,
            page_refs: Vec::new(),
            fonts,
            image_cache: HashMap::new(),
            current: None,
        }
    }

    /// Number of finished pages
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Build the page tree and catalog and hand out the document.
    pub fn finish(mut self) -> Result<Document> {
        if self.current.is_some() {
            return Err(QuizcardError::Sink(
                "finish called with a page still open".to_string(),
            ));
        }

        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.doc
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.doc.trailer.set("Root", catalog_id);

        Ok(self.doc)
    }

    fn page(&mut self) -> Result<&mut OpenPage> {
        self.current
            .as_mut()
            .ok_or_else(|| QuizcardError::Sink("no page is open".to_string()))
    }

    fn text_ops(text: &TextLayout, x: f32, top: f32, scale: f32) -> String {
        let mut ops = format!("q {scale:.4} 0 0 {scale:.4} {x:.3} {top:.3} cm\n");
        for (k, line) in text.lines.iter().enumerate() {
            let baseline = -(k as f32 * text.leading) - text.font_size * ASCENT_RATIO;
            for run in &line.runs {
                ops.push_str(&format!(
                    "BT /{} {} Tf {} {:.3} {:.3} Td <{}> Tj ET\n",
                    run.font.resource_name(),
                    run.size,
                    fill_color(run.color),
                    line.x_offset + run.x,
                    baseline,
                    encode_hex(&run.text)
                ));
            }
        }
        ops.push_str("Q\n");
        ops
    }

    fn image_ops(&mut self, image: &ImageLayout, x: f32, top: f32, scale: f32) -> Result<String> {
        let xobject_id = match self.image_cache.get(&image.path) {
            Some(&id) => id,
            None => {
                let id = create_image_xobject(&mut self.doc, &image.path)?;
                self.image_cache.insert(image.path.clone(), id);
                id
            }
        };

        let page = self.page()?;
        page.image_count += 1;
        let name = format!("Im{}", page.image_count);
        page.xobjects.set(name.as_bytes(), Object::Reference(xobject_id));

        let width = image.width * scale;
        let height = image.height * scale;
        Ok(format!(
            "q {:.3} 0 0 {:.3} {:.3} {:.3} cm /{} Do Q\n",
            width,
            height,
            x,
            top - height,
            name
        ))
    }
}

impl PageSink for PdfSink {
    fn begin_page(&mut self, size: Dimension) -> Result<()> {
        if self.current.is_some() {
            return Err(QuizcardError::Sink(
                "begin_page called twice without end_page".to_string(),
            ));
        }
        self.current = Some(OpenPage {
            size,
            ops: Vec::new(),
            xobjects: Dictionary::new(),
            image_count: 0,
        });
        Ok(())
    }

    fn draw_item(&mut self, item: &LaidOutItem, x: f32, top: f32, scale: f32) -> Result<()> {
        let ops = match item {
            LaidOutItem::Text(text) => Self::text_ops(text, x, top, scale),
            LaidOutItem::Image(image) => self.image_ops(image, x, top, scale)?,
        };
        self.page()?.ops.push(ops);
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, line_width: f32) -> Result<()> {
        let ops = format!(
            "q {} {:.3} w {:.3} {:.3} {:.3} {:.3} re S Q\n",
            stroke_color(color),
            line_width,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        self.page()?.ops.push(ops);
        Ok(())
    }

    fn draw_label(&mut self, text: &str, x: f32, y: f32, size: f32) -> Result<()> {
        let ops = format!(
            "BT /{} {} Tf {} {:.3} {:.3} Td <{}> Tj ET\n",
            BuiltinFont::Helvetica.resource_name(),
            size,
            fill_color(Color::BLACK),
            x,
            y,
            encode_hex(text)
        );
        self.page()?.ops.push(ops);
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        let page = self
            .current
            .take()
            .ok_or_else(|| QuizcardError::Sink("end_page without begin_page".to_string()))?;

        let mut font_resources = Dictionary::new();
        for (font, id) in &self.fonts {
            font_resources.set(font.resource_name(), Object::Reference(*id));
        }
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(font_resources));
        if !page.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(page.xobjects));
        }

        let content = page.ops.join("");
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_tree_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page.size.width),
                    Object::Real(page.size.height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]);
        let page_id = self.doc.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }
}

fn fill_color(color: Color) -> String {
    format!("{:.3} {:.3} {:.3} rg", color.r, color.g, color.b)
}

fn stroke_color(color: Color) -> String {
    format!("{:.3} {:.3} {:.3} RG", color.r, color.g, color.b)
}

/// Encode text for a WinAnsi base-14 font as a PDF hex string body.
/// Characters outside the encoding become `?`.
fn encode_hex(text: &str) -> String {
    text.chars()
        .map(|ch| format!("{:02X}", win_ansi_byte(ch)))
        .collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        c if (c as u32) < 0x80 => c as u8,
        c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
        _ => b'?',
    }
}
