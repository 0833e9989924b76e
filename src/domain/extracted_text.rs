use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionTier {
    Simple,
    Advanced,
    PlainText,
}

impl ExtractionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
            Self::PlainText => "plain_text",
        }
    }
}

impl fmt::Display for ExtractionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub tier: ExtractionTier,
}

impl ExtractedText {
    pub fn new(text: impl Into<String>, tier: ExtractionTier) -> Self {
        Self {
            text: text.into(),
            tier,
        }
    }

    pub fn trimmed_len(&self) -> usize {
        self.text.trim().chars().count()
    }

    pub fn meets_minimum(&self, min_chars: usize) -> bool {
        self.trimmed_len() >= min_chars
    }

    pub fn snippet(&self, max_chars: usize) -> String {
        self.text.trim().chars().take(max_chars).collect()
    }
}
