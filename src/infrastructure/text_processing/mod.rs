mod content_stream_extractor;
mod page_text;
mod simple_pdf_extractor;

pub use content_stream_extractor::ContentStreamExtractor;
pub use page_text::{join_pages, join_runs, normalize_page_text};
pub use simple_pdf_extractor::SimplePdfExtractor;
