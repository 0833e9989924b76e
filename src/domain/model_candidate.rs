use super::generation_method::GenerationMethod;

const MODEL_PREFIX: &str = "models/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub name: String,
    pub supported_methods: Vec<String>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>, supported_methods: Vec<String>) -> Self {
        Self {
            name: name.into(),
            supported_methods,
        }
    }

    pub fn suggests_text_generation(&self) -> bool {
        let name = self.name.to_ascii_lowercase();
        self.supported_methods
            .iter()
            .any(|m| m.to_ascii_lowercase().contains("generate"))
            || name.contains("gemini")
            || name.contains("bison")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrigin {
    Discovered,
    Configured,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCandidate {
    pub id: String,
    pub origin: CandidateOrigin,
    capability_hint: Option<Vec<String>>,
}

impl ModelCandidate {
    pub fn configured(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            origin: CandidateOrigin::Configured,
            capability_hint: None,
        }
    }

    pub fn fallback(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            origin: CandidateOrigin::Fallback,
            capability_hint: None,
        }
    }

    pub fn discovered(descriptor: ModelDescriptor) -> Self {
        Self {
            id: descriptor.name,
            origin: CandidateOrigin::Discovered,
            capability_hint: Some(descriptor.supported_methods),
        }
    }

    /// Methods to try, in attempt order. Without a capability hint every
    /// method is assumed present and the remote side decides.
    pub fn present_methods(&self) -> Vec<GenerationMethod> {
        match &self.capability_hint {
            None => GenerationMethod::ATTEMPT_ORDER.to_vec(),
            Some(advertised) => GenerationMethod::ATTEMPT_ORDER
                .into_iter()
                .filter(|m| advertised.iter().any(|a| a == m.as_str()))
                .collect(),
        }
    }

    pub fn canonical_id(&self) -> &str {
        canonical_model_id(&self.id)
    }
}

pub fn canonical_model_id(id: &str) -> &str {
    id.strip_prefix(MODEL_PREFIX).unwrap_or(id)
}

pub fn build_candidate_list(configured: Option<&str>, fallbacks: &[String]) -> Vec<ModelCandidate> {
    let mut candidates: Vec<ModelCandidate> = Vec::new();
    let configured = configured
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ModelCandidate::configured);
    let fallbacks = fallbacks
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(ModelCandidate::fallback);

    for candidate in configured.into_iter().chain(fallbacks) {
        if !candidates
            .iter()
            .any(|c| c.canonical_id() == candidate.canonical_id())
        {
            candidates.push(candidate);
        }
    }
    candidates
}
