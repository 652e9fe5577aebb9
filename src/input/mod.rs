use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document has no pages: {0}")]
    Empty(PathBuf),
}

/// Page texts of a document, first page first.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub pages: Vec<String>,
    pub source: String,
}

impl LoadedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

pub mod pdf;
pub mod text;

/// Loads page texts, picking the reader from the file extension.
///
/// `.pdf` (any case) goes through the PDF reader, everything else is read as
/// plain text with form feeds between pages.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let doc = if is_pdf {
        pdf::load(path)?
    } else {
        text::load(path)?
    };

    if doc.pages.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    tracing::info!(source = %doc.source, pages = doc.page_count(), "document loaded");
    Ok(doc)
}

/// Splits a page into text blocks separated by blank lines.
pub fn split_blocks(page: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in page.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(begin) = start.take() {
                blocks.push(&page[begin..end]);
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.trim_end_matches(['\r', '\n']).len();
        }
        offset += line.len();
    }

    if let Some(begin) = start {
        blocks.push(&page[begin..end]);
    }

    blocks
}

/// Words of a block: newlines count as spaces, split on single spaces.
///
/// Empty fragments from repeated spaces are kept; the tokenizer drops them.
pub fn block_words(block: &str) -> Vec<String> {
    block
        .replace("\r\n", " ")
        .replace('\n', " ")
        .split(' ')
        .map(str::to_string)
        .collect()
}
