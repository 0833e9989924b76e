mod analyze;
mod api_error;
mod chat;
mod generate;
mod health;
mod library;
mod payload;
mod translate;

pub use analyze::{AnalyzeRequest, AnalyzeResponse, analyze_handler};
pub use api_error::{ApiError, ErrorResponse};
pub use chat::{ChatRequest, ChatResponse, chat_handler};
pub use generate::{GenerateRequest, GenerateResponse, generate_handler};
pub use health::{HealthResponse, health_handler};
pub use library::{
    LibraryListResponse, UploadResponse, library_list_handler, library_upload_handler,
};
pub use translate::{TranslateRequest, translate_handler};
