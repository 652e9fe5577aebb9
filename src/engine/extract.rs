use crate::engine::config::{ExtractConfig, PageRange};
use crate::engine::error::ExtractError;
use crate::input::{self, block_words, split_blocks, LoadedDocument};
use crate::toc::{build_entries, tokenize, Entry};

/// Checks that `range` is non-empty, starts at page 1 or later and fits the document.
pub fn validate_range(range: PageRange, page_count: usize) -> Result<(), ExtractError> {
    if range.begin == 0 || range.begin > range.end || range.end > page_count {
        return Err(ExtractError::InvalidRange { range, page_count });
    }
    Ok(())
}

/// Entries found in one page, block by block.
pub fn page_entries(page: &str) -> Vec<Entry> {
    split_blocks(page)
        .into_iter()
        .flat_map(|block| build_entries(&tokenize(&block_words(block))))
        .collect()
}

/// Reads every page of `range` and collects entries in page, then block, order.
///
/// Page numbers are as printed; see [`apply_offset`].
pub fn extract_entries(doc: &LoadedDocument, range: PageRange) -> Result<Vec<Entry>, ExtractError> {
    validate_range(range, doc.page_count())?;

    let mut entries = Vec::new();
    for index in range.indices() {
        let found = page_entries(&doc.pages[index]);
        tracing::debug!(page = index + 1, entries = found.len(), "page parsed");
        entries.extend(found);
    }

    Ok(entries)
}

/// Adds `offset` to every entry's page.
pub fn apply_offset(entries: &mut [Entry], offset: i64) {
    for entry in entries.iter_mut() {
        entry.shift_page(offset);
    }
}

/// Loads the document, extracts the contents and applies the page offset.
pub fn run(config: &ExtractConfig) -> Result<Vec<Entry>, ExtractError> {
    let doc = input::load(&config.input)?;
    let mut entries = extract_entries(&doc, config.range)?;

    let offset = config.effective_offset();
    apply_offset(&mut entries, offset);
    tracing::info!(entries = entries.len(), offset, "contents extracted");

    Ok(entries)
}
