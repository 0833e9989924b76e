mod analysis_interpreter;
mod generation_service;
mod invocation_adapter;
mod library_service;
mod model_resolver;
mod prompts;
mod text_extraction_service;
mod translation_interpreter;

pub use analysis_interpreter::{interpret_analysis, strip_code_fences};
pub use generation_service::GenerationService;
pub use invocation_adapter::{
    Invocation, InvocationAdapter, ResponseShape, extract_text, normalize_text,
};
pub use library_service::{LibraryService, StoredUpload};
pub use model_resolver::{ModelResolver, Resolution};
pub use prompts::{
    analysis_prompt, chat_prompt, clean_generated_content, generation_prompt, translation_prompt,
};
pub use text_extraction_service::TextExtractionService;
pub use translation_interpreter::{SECTION_DELIMITER, interpret_translation};
