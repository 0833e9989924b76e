use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const PDF_SIGNATURE: &[u8] = b"%PDF";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: ContentType,
    data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    pub fn from_mime(mime: Option<&str>) -> Self {
        match mime.map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case("application/pdf") => Self::Pdf,
            _ => Self::Text,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("document payload is not valid base64: {0}")]
pub struct DocumentDecodeError(#[from] base64::DecodeError);

impl Document {
    pub fn new(filename: impl Into<String>, content_type: ContentType, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            data,
        }
    }

    pub fn from_base64(
        filename: impl Into<String>,
        content_type: ContentType,
        encoded: &str,
    ) -> Result<Self, DocumentDecodeError> {
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let data = STANDARD.decode(compact)?;
        Ok(Self::new(filename, content_type, data))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_pdf_signature(&self) -> bool {
        self.data.starts_with(PDF_SIGNATURE)
    }
}
