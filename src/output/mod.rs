//! Where extracted entries end up: review text or JSON, on stdout or in a file.

use crate::engine::ExtractError;
use crate::toc::Entry;
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Level n: title, p. page` line per entry
    Text,
    /// Array of `{level, title, page}` objects
    Json,
}

pub fn render(entries: &[Entry], format: OutputFormat) -> Result<String, ExtractError> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(entries)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes the rendered entries to `destination`, or stdout when `None`.
pub fn write_entries(
    entries: &[Entry],
    format: OutputFormat,
    destination: Option<&Path>,
) -> Result<(), ExtractError> {
    let rendered = render(entries, format)?;

    match destination {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "contents written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new(1, "1. Introduction", 13),
            Entry::new(2, "1.1 Scope", 14),
        ]
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Level 1:\t 1. Introduction,\t p. 13\nLevel 2:\t 1.1 Scope,\t p. 14\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["level"], 1);
        assert_eq!(value[0]["title"], "1. Introduction");
        assert_eq!(value[1]["page"], 14);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_entries_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toc.json");

        write_entries(&sample(), OutputFormat::Json, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"title\": \"1.1 Scope\""));
    }
}
