use serde::Serialize;

pub const UNKNOWN_LANGUAGE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub original_language: String,
    pub translated_content: String,
}

impl Translation {
    pub fn unlabelled(content: impl Into<String>) -> Self {
        Self {
            original_language: UNKNOWN_LANGUAGE.to_string(),
            translated_content: content.into(),
        }
    }
}
