#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
}

impl GenerationConfig {
    pub fn analysis() -> Self {
        Self {
            temperature: Some(0.2),
            top_p: Some(0.8),
            top_k: Some(40),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
