use crate::engine::config::PageRange;
use crate::input::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Invalid page range {range} for a document with {page_count} pages")]
    InvalidRange { range: PageRange, page_count: usize },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
