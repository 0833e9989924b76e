use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::{
    AnalysisOutcome, DEFAULT_DOCUMENT_TYPE, DEFAULT_SUMMARY, Degradation, PartiesInvolved,
    StructuredAnalysis,
};

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\n?|\n?```").unwrap());

const DEGRADED_SUMMARY_CHARS: usize = 500;

pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// Reads model output as a structured analysis. Never fails: unparseable
/// output produces a degraded analysis carrying the raw text.
pub fn interpret_analysis(raw: &str) -> AnalysisOutcome {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(fields)) => AnalysisOutcome::parsed(read_analysis(&fields)),
        Ok(other) => degraded(raw, format!("expected a JSON object, got {}", kind_of(&other))),
        Err(e) => degraded(raw, e.to_string()),
    }
}

fn read_analysis(fields: &Map<String, Value>) -> StructuredAnalysis {
    StructuredAnalysis {
        document_type: scalar(fields.get("documentType"))
            .unwrap_or_else(|| DEFAULT_DOCUMENT_TYPE.to_string()),
        summary: scalar(fields.get("summary")).unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        key_points: string_list(fields.get("keyPoints")),
        parties_involved: parties(fields.get("partiesInvolved")),
        legal_concerns: string_list(fields.get("legalConcerns")),
        recommendations: string_list(fields.get("recommendations")),
        timeline_critical: string_list(fields.get("timelineCritical")),
        legal_provisions: string_list(fields.get("legalProvisions")),
    }
}

fn degraded(raw: &str, reason: String) -> AnalysisOutcome {
    tracing::debug!(reason = %reason, chars = raw.len(), "Analysis output degraded");

    let summary: String = raw.chars().take(DEGRADED_SUMMARY_CHARS).collect();
    let analysis = StructuredAnalysis {
        document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
        summary: format!("{summary}..."),
        key_points: owned(&[
            "Document uploaded and processed successfully",
            "Full AI analysis available in raw response",
            "Manual review recommended for detailed insights",
        ]),
        legal_concerns: owned(&[
            "Automated JSON parsing encountered an issue",
            "Professional legal review recommended",
        ]),
        recommendations: owned(&[
            "Have document reviewed by qualified legal counsel",
            "Verify all terms and conditions manually",
            "Ensure compliance with applicable laws",
        ]),
        ..StructuredAnalysis::default()
    };

    AnalysisOutcome {
        analysis,
        degradation: Some(Degradation {
            raw_response: raw.to_string(),
            reason,
        }),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn item_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(item_text).collect(),
        _ => Vec::new(),
    }
}

fn parties(value: Option<&Value>) -> PartiesInvolved {
    let Some(Value::Object(groups)) = value else {
        return PartiesInvolved::new();
    };

    groups
        .iter()
        .filter_map(|(group, names)| {
            let names = match names {
                Value::Array(_) => string_list(Some(names)),
                Value::Null => return None,
                other => item_text(other).into_iter().collect(),
            };
            Some((group.clone(), names))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
