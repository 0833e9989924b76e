use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMethod {
    GenerateContent,
    GenerateText,
    GenerateMessage,
}

impl GenerationMethod {
    pub const ATTEMPT_ORDER: [GenerationMethod; 3] = [
        GenerationMethod::GenerateContent,
        GenerationMethod::GenerateText,
        GenerationMethod::GenerateMessage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenerateContent => "generateContent",
            Self::GenerateText => "generateText",
            Self::GenerateMessage => "generateMessage",
        }
    }
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
