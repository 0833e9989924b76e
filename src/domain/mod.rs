mod analysis;
mod api_key;
mod document;
mod document_kind;
mod extracted_text;
mod generation_config;
mod generation_method;
mod invocation_attempt;
mod library_document;
mod model_candidate;
mod translation;

pub use analysis::{
    AnalysisOutcome, DEFAULT_DOCUMENT_TYPE, DEFAULT_SUMMARY, Degradation, PartiesInvolved,
    StructuredAnalysis,
};
pub use api_key::{ApiKey, CredentialSource};
pub use document::{ContentType, Document, DocumentDecodeError};
pub use document_kind::DocumentKind;
pub use extracted_text::{ExtractedText, ExtractionTier};
pub use generation_config::GenerationConfig;
pub use generation_method::GenerationMethod;
pub use invocation_attempt::{AttemptLog, AttemptOutcome, InvocationAttempt};
pub use library_document::{
    LibraryAuthor, LibraryDocument, is_pdf_file_name, library_file_name, public_url,
};
pub use model_candidate::{
    CandidateOrigin, ModelCandidate, ModelDescriptor, build_candidate_list, canonical_model_id,
};
pub use translation::{Translation, UNKNOWN_LANGUAGE};
