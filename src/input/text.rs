use super::{LoadError, LoadedDocument};
use std::path::Path;

const FORM_FEED: char = '\x0c';

/// Load a plain text export, one page per form-feed separated chunk.
///
/// A trailing form feed does not open an extra page.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(LoadedDocument {
        pages: split_pages(&content),
        source: format!("text:{}", path.display()),
    })
}

fn split_pages(content: &str) -> Vec<String> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let content = content.strip_suffix(FORM_FEED).unwrap_or(content);
    content.split(FORM_FEED).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_pages_form_feed() {
        let pages = split_pages("cover\x0c1. Scope 4\x0c2. Design 9\x0c");
        assert_eq!(pages, vec!["cover", "1. Scope 4", "2. Design 9"]);
    }

    #[test]
    fn test_split_pages_single_page() {
        assert_eq!(split_pages("1. Scope 4\n"), vec!["1. Scope 4\n"]);
    }

    #[test]
    fn test_split_pages_blank() {
        assert!(split_pages("  \n").is_empty());
    }

    #[test]
    fn test_text_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Contents\x0c1. Scope 4").unwrap();

        let doc = load(file.path()).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert!(doc.source.starts_with("text:"));
    }

    #[test]
    fn test_text_load_nonexistent_file() {
        let result = load(Path::new("/nonexistent/contents.txt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
