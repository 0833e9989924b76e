use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

const DEFAULT_UPLOAD_NAME: &str = "upload";
const DEFAULT_EXTENSION: &str = ".pdf";
const IMPORTED: &str = "Imported";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryAuthor {
    pub name: String,
    pub role: String,
    pub email: String,
}

impl LibraryAuthor {
    fn importer() -> Self {
        Self {
            name: IMPORTED.to_string(),
            role: "Importer".to_string(),
            email: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryDocument {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub pdf_url: String,
    pub created_at: String,
    pub date: Option<String>,
    pub court: Option<String>,
    pub tags: Vec<String>,
    pub author: LibraryAuthor,
}

impl LibraryDocument {
    pub fn imported(
        filename: &str,
        description: String,
        url_prefix: &str,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id: filename.to_string(),
            title: title_for(filename),
            category: IMPORTED.to_string(),
            description,
            pdf_url: public_url(url_prefix, filename),
            created_at: modified.to_rfc3339(),
            date: None,
            court: None,
            tags: Vec::new(),
            author: LibraryAuthor::importer(),
        }
    }
}

pub fn is_pdf_file_name(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".pdf")
}

pub fn public_url(prefix: &str, filename: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), filename)
}

fn title_for(filename: &str) -> String {
    filename
        .strip_suffix(".pdf")
        .unwrap_or(filename)
        .to_string()
}

/// `<unix-millis>-<sanitized-base><ext>`, extension lowercased and
/// defaulting to `.pdf`.
pub fn library_file_name(original_name: &str, timestamp_millis: i64) -> String {
    let original = Path::new(original_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_UPLOAD_NAME);

    let (stem, extension) = match original.rfind('.') {
        Some(idx) if idx > 0 => (&original[..idx], original[idx..].to_ascii_lowercase()),
        _ => (original, DEFAULT_EXTENSION.to_string()),
    };

    let base: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{timestamp_millis}-{base}{extension}")
}
