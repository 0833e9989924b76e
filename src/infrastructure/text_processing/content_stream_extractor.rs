use std::collections::HashSet;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::application::ports::{ExtractionError, PageTextExtractor};
use crate::domain::{ExtractedText, ExtractionTier};

use super::page_text::{join_pages, join_runs};

const MAX_FORM_DEPTH: usize = 8;
const MAX_PARENT_DEPTH: usize = 32;
// Thousandths of an em; a wider negative kern reads as a word gap.
const WORD_GAP_ADJUSTMENT: f64 = -200.0;

pub struct ContentStreamExtractor {
    timeout: Duration,
}

impl ContentStreamExtractor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(data: &[u8], timeout: Duration) -> Result<Vec<String>, ExtractionError> {
        let deadline = Instant::now() + timeout;
        let doc = Document::load_mem(data).map_err(|e| ExtractionError::ParseFailed(e.to_string()))?;

        let mut pages = Vec::new();
        for (page_number, page_id) in doc.get_pages() {
            if Instant::now() >= deadline {
                return Err(ExtractionError::TimedOut {
                    tier: ExtractionTier::Advanced,
                    seconds: timeout.as_secs(),
                });
            }

            let content = match doc
                .get_page_content(page_id)
                .and_then(|bytes| Content::decode(&bytes))
            {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(page = page_number, error = %e, "Skipping undecodable page content");
                    continue;
                }
            };

            let resources = page_resources(&doc, page_id);
            let mut walker = PageWalker {
                doc: &doc,
                runs: Vec::new(),
                form_path: HashSet::new(),
            };
            walker.walk(&content, resources, 0);

            pages.push(join_runs(walker.runs.iter().map(String::as_str)));
        }

        Ok(pages)
    }
}

struct PageWalker<'a> {
    doc: &'a Document,
    runs: Vec<String>,
    // Forms on the current `Do` chain only; a stamp drawn twice is read twice.
    form_path: HashSet<ObjectId>,
}

impl<'a> PageWalker<'a> {
    fn walk(&mut self, content: &Content, resources: Option<&'a Dictionary>, depth: usize) {
        for operation in &content.operations {
            let operands = &operation.operands;
            match operation.operator.as_str() {
                "Tj" | "'" => self.push_string(operands.first()),
                "\"" => self.push_string(operands.get(2)),
                "TJ" => {
                    if let Some(Object::Array(items)) = operands.first() {
                        self.push_array(items);
                    }
                }
                "Do" if depth < MAX_FORM_DEPTH => {
                    if let Some(name) = operands.first().and_then(|o| o.as_name().ok()) {
                        self.walk_form(name, resources, depth);
                    }
                }
                _ => {}
            }
        }
    }

    fn walk_form(&mut self, name: &[u8], resources: Option<&'a Dictionary>, depth: usize) {
        let doc = self.doc;
        let Some(Object::Reference(form_id)) = resources
            .and_then(|r| r.get(b"XObject").ok())
            .and_then(|x| resolve(doc, x))
            .and_then(|x| x.as_dict().ok())
            .and_then(|x| x.get(name).ok())
        else {
            return;
        };

        let form_id = *form_id;
        if !self.form_path.insert(form_id) {
            return;
        }
        self.walk_form_stream(form_id, resources, depth);
        self.form_path.remove(&form_id);
    }

    fn walk_form_stream(&mut self, form_id: ObjectId, resources: Option<&'a Dictionary>, depth: usize) {
        let doc = self.doc;

        let Some(stream) = doc.get_object(form_id).ok().and_then(|o| o.as_stream().ok()) else {
            return;
        };
        let is_form = stream
            .dict
            .get(b"Subtype")
            .and_then(|s| s.as_name())
            .is_ok_and(|s| s == b"Form");
        if !is_form {
            return;
        }

        let bytes = stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone());
        let Ok(content) = Content::decode(&bytes) else {
            return;
        };

        let form_resources = stream
            .dict
            .get(b"Resources")
            .ok()
            .and_then(|r| resolve(doc, r))
            .and_then(|r| r.as_dict().ok())
            .or(resources);

        self.walk(&content, form_resources, depth + 1);
    }

    fn push_string(&mut self, operand: Option<&Object>) {
        if let Some(Object::String(bytes, _)) = operand {
            self.runs.push(decode_pdf_string(bytes));
        }
    }

    fn push_array(&mut self, items: &[Object]) {
        let mut run = String::new();
        for item in items {
            match item {
                Object::String(bytes, _) => run.push_str(&decode_pdf_string(bytes)),
                Object::Integer(adjust) if (*adjust as f64) <= WORD_GAP_ADJUSTMENT => run.push(' '),
                Object::Real(adjust) if f64::from(*adjust) <= WORD_GAP_ADJUSTMENT => run.push(' '),
                _ => {}
            }
        }
        self.runs.push(run);
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn page_resources(doc: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    let mut node = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_PARENT_DEPTH {
        if let Some(resources) = node
            .get(b"Resources")
            .ok()
            .and_then(|r| resolve(doc, r))
            .and_then(|r| r.as_dict().ok())
        {
            return Some(resources);
        }
        let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }
    None
}

fn decode_pdf_string(bytes: &[u8]) -> String {
    let decoded = match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        _ => bytes.iter().map(|&b| char::from(b)).collect(),
    };
    decoded
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[async_trait]
impl PageTextExtractor for ContentStreamExtractor {
    fn tier(&self) -> ExtractionTier {
        ExtractionTier::Advanced
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let owned = data.to_vec();
        let timeout = self.timeout;

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned, timeout)),
        )
        .await
        .map_err(|_| ExtractionError::TimedOut {
            tier: ExtractionTier::Advanced,
            seconds: self.timeout.as_secs(),
        })?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        let text = join_pages(pages);
        tracing::debug!(page_count, chars = text.len(), "Content stream extraction complete");

        if text.is_empty() {
            return Err(ExtractionError::NoTextFound);
        }

        Ok(ExtractedText::new(text, ExtractionTier::Advanced))
    }
}
