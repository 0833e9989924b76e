use std::collections::BTreeMap;

use serde::Serialize;

pub const DEFAULT_DOCUMENT_TYPE: &str = "Legal Document";
pub const DEFAULT_SUMMARY: &str = "Document analysis completed.";

pub type PartiesInvolved = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAnalysis {
    pub document_type: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub parties_involved: PartiesInvolved,
    pub legal_concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub timeline_critical: Vec<String>,
    pub legal_provisions: Vec<String>,
}

impl Default for StructuredAnalysis {
    fn default() -> Self {
        Self {
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            summary: DEFAULT_SUMMARY.to_string(),
            key_points: Vec::new(),
            parties_involved: PartiesInvolved::new(),
            legal_concerns: Vec::new(),
            recommendations: Vec::new(),
            timeline_critical: Vec::new(),
            legal_provisions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub raw_response: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub analysis: StructuredAnalysis,
    pub degradation: Option<Degradation>,
}

impl AnalysisOutcome {
    pub fn parsed(analysis: StructuredAnalysis) -> Self {
        Self {
            analysis,
            degradation: None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }
}
