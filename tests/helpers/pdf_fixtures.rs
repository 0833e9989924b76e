use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// Builds a PDF from per-page operation lists sharing one Type1 font (`F1`).
/// Resources live on the page tree root so pages inherit them.
pub struct PdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    font_id: ObjectId,
    xobjects: lopdf::Dictionary,
    page_ids: Vec<ObjectId>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        Self {
            doc,
            pages_id,
            font_id,
            xobjects: lopdf::Dictionary::new(),
            page_ids: Vec::new(),
        }
    }

    pub fn page(mut self, operations: Vec<Operation>) -> Self {
        let content = Content { operations };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
        });
        self.page_ids.push(page_id);
        self
    }

    pub fn text_page(self, lines: &[&str]) -> Self {
        self.page(text_block(lines))
    }

    /// Registers a Form XObject under `name` drawing `lines`.
    pub fn form(mut self, name: &str, lines: &[&str]) -> Self {
        let content = Content {
            operations: text_block(lines),
        };
        let form_id = self.doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Form",
                "BBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => self.font_id },
                },
            },
            content.encode().unwrap(),
        ));
        self.xobjects.set(name, form_id);
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| (*id).into()).collect();
        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => self.font_id },
                "XObject" => self.xobjects.clone(),
            },
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut buffer = Vec::new();
        self.doc.save_to(&mut buffer).unwrap();
        buffer
    }
}

pub fn text_block(lines: &[&str]) -> Vec<Operation> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 760.into()]),
        Operation::new("TL", vec![14.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));
    operations
}

pub fn utf16_string(text: &str) -> Object {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

pub fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
    PdfBuilder::new().text_page(lines).build()
}

/// A page with no text operators, like a scanned image.
pub fn blank_pdf() -> Vec<u8> {
    PdfBuilder::new().page(Vec::new()).build()
}

pub const LEASE_TEXT: &str =
    "This lease agreement is made between Asha Verma, the landlord, and Rohan Iyer, the tenant.";
