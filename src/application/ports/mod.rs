mod generative_backend;
mod generative_model_api;
mod library_store;
mod page_text_extractor;

pub use generative_backend::{
    Generation, GenerationError, GenerativeBackend, InvocationError, ResolutionError,
};
pub use generative_model_api::{GenerativeModelApi, ModelApiError, RawResult};
pub use library_store::{LibraryStore, LibraryStoreError, StoredObject};
pub use page_text_extractor::{ExtractionError, PageTextExtractor};
