use std::sync::LazyLock;

use regex::Regex;

use crate::domain::DocumentKind;

static LEADING_MARKDOWN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*markdown\s*").unwrap());

const ANALYSIS_INSTRUCTIONS: &str = r#"CRITICAL INSTRUCTIONS:
1. READ THE ENTIRE DOCUMENT CAREFULLY before analyzing
2. Extract ALL specific details: names, dates, case numbers, sections, amounts
3. Identify the exact type of legal document
4. Provide a comprehensive summary that captures the essence of the case/document
5. Be specific and detailed - avoid generic statements
6. For court orders: identify the ruling, conditions, and implications
7. For contracts: identify parties, obligations, terms, and conditions
8. For notices: identify the nature, demands, and timelines

Provide your analysis in the following JSON format:

{
    "documentType": "Specific type (e.g., 'Anticipatory Bail Order', 'Criminal Complaint', 'Civil Contract', 'Legal Notice', 'Divorce Petition')",
    "summary": "A detailed 4-6 sentence summary covering what the document is, who the parties are, the main issue, the action taken or requested, and the outcome",
    "keyPoints": [
        "8-12 specific points: document and case numbers, full party names, dates, sections of law cited, exact monetary amounts, court and judge names, orders passed, conditions imposed, deadlines"
    ],
    "legalConcerns": [
        "4-8 specific legal issues, risks or concerns, including procedural gaps, jurisdiction questions and time-sensitive matters"
    ],
    "recommendations": [
        "5-10 specific, actionable recommendations, including which legal experts to consult and which evidence or documents to gather"
    ],
    "partiesInvolved": {
        "petitioners": ["Petitioner names with their relation/role"],
        "respondents": ["Respondent names"],
        "otherParties": ["Any other relevant parties"]
    },
    "timelineCritical": [
        "Important dates in chronological order, formatted 'Date - Event/Action'"
    ],
    "legalProvisions": [
        "Sections, acts and provisions cited, formatted 'Section X of Act Name' with a brief explanation"
    ]
}

Your analysis must be detailed, specific, and directly derived from the document content. Do not make assumptions or add information not present in the document. Respond with the JSON object only."#;

pub fn analysis_prompt(document_text: &str) -> String {
    format!(
        "You are an expert legal document analyzer with expertise in Indian law, court proceedings, \
         and legal documentation. Analyze the following document thoroughly and provide a detailed, \
         accurate analysis.\n\nDOCUMENT CONTENT:\n{document_text}\n\n{ANALYSIS_INSTRUCTIONS}"
    )
}

pub fn translation_prompt(document_text: &str, target_language: &str, max_chars: usize) -> String {
    let excerpt: String = document_text.chars().take(max_chars).collect();
    format!(
        "Translate the following legal document to {target_language}. Maintain all legal terminology \
         accuracy and document structure. Also identify the original language.\n\n\
         Document content:\n{excerpt}\n\n\
         Provide your response in this exact format:\n\
         Original Language: [detected language]\n---\n\
         [translated content here with proper formatting and line breaks]"
    )
}

pub fn generation_prompt(kind: DocumentKind, title: &str, requirements: &str) -> String {
    format!(
        "You are a professional legal document writer. Generate {} with the following details:\n\n\
         Title: {title}\nRequirements: {requirements}\n\n\
         Please create a comprehensive, professional legal document with numbered clauses, \
         defined terms, signature blocks and placeholders in [BRACKETS] for any details that \
         were not provided. Return plain text only.",
        kind.description()
    )
}

pub fn chat_prompt(message: &str, legal_context: Option<&str>) -> String {
    format!("{}\n\nUser question: {message}", legal_context.unwrap_or_default())
}

pub fn clean_generated_content(content: &str) -> String {
    let unfenced = content.replace("```", "");
    LEADING_MARKDOWN_TAG
        .replace(&unfenced, "")
        .trim()
        .to_string()
}
