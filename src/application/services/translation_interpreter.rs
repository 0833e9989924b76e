use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Translation, UNKNOWN_LANGUAGE};

pub const SECTION_DELIMITER: &str = "---";

static ORIGINAL_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[\s*#]*Original Language:\**[ \t]*(.+)$").unwrap());

pub fn interpret_translation(raw: &str) -> Translation {
    let Some((header, body)) = raw.split_once(SECTION_DELIMITER) else {
        return Translation::unlabelled(raw);
    };

    let original_language = ORIGINAL_LANGUAGE
        .captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().trim_matches('*').trim().to_string())
        .filter(|lang| !lang.is_empty())
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

    let body = body.trim();
    let translated_content = if body.is_empty() {
        raw.to_string()
    } else {
        body.to_string()
    };

    Translation {
        original_language,
        translated_content,
    }
}
