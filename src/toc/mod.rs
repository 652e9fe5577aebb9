//! Table of contents parsing: raw words become tokens, tokens become entries.

pub mod entry;
pub mod lexer;
pub mod sanitize;
pub mod token;
pub mod tokenizer;

pub use entry::Entry;
pub use lexer::{build_entries, EntryBuilder};
pub use sanitize::sanitize;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
