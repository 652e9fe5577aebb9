pub mod config;
pub mod error;
pub mod extract;

pub use config::{ExtractConfig, PageRange};
pub use error::ExtractError;
pub use extract::{apply_offset, extract_entries, run};
