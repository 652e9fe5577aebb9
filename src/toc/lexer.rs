use crate::toc::entry::{section_level, Entry};
use crate::toc::sanitize::sanitize;
use crate::toc::token::{Token, TokenKind};

/// Accumulator for the entry currently being read.
///
/// `title_parts` starts with the section label and is empty while no entry is open.
#[derive(Debug, Default)]
pub struct EntryBuilder {
    title_parts: Vec<String>,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.title_parts.is_empty()
    }

    /// Feeds one token, with the token after it for lookahead.
    ///
    /// Returns the finished entry when `token` is the page number that closes it.
    pub fn push(&mut self, token: &Token, next: Option<&Token>) -> Option<Entry> {
        match token.kind {
            // A section label always starts a fresh entry, abandoning any open one.
            TokenKind::Section => {
                self.title_parts = vec![token.text.clone()];
                None
            }
            TokenKind::Title => {
                if self.is_open() {
                    self.title_parts.push(token.text.clone());
                }
                None
            }
            TokenKind::Number => {
                if !self.is_open() {
                    return None;
                }

                // Page numbers are followed by the next section label; anything else
                // means the number belongs to the heading.
                if next.is_some_and(|next| !next.is_section()) {
                    self.title_parts.push(token.text.clone());
                    return None;
                }

                // Only a label so far: the label was split by stray spaces, glue it back.
                if self.title_parts.len() == 1 {
                    self.title_parts[0].push_str(&token.text);
                    return None;
                }

                Some(self.close(&token.text))
            }
        }
    }

    fn close(&mut self, page: &str) -> Entry {
        let parts = std::mem::take(&mut self.title_parts);
        let level = section_level(&parts[0]);
        let title = sanitize(&parts.join(" "));
        // Digits only, so the parse can only fail on overflow.
        let page = page.parse().unwrap_or(u32::MAX);

        Entry { level, title, page }
    }
}

/// Assembles tokens into entries, in order.
///
/// Material before the first section label, and an entry still open at the end, are dropped.
pub fn build_entries(tokens: &[Token]) -> Vec<Entry> {
    let mut builder = EntryBuilder::new();

    tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| builder.push(token, tokens.get(index + 1)))
        .collect()
}
