/// Word classes recognised on a table of contents page.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Dotted section label such as `1.`, `2.3` or `4.2.23`.
    Section,
    /// Letters and hyphens only.
    Title,
    /// Digits only. Either a page number or a number inside a heading.
    Number,
}

/// A classified word. `text` is the input word, unchanged.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Section, text)
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Title, text)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn is_section(&self) -> bool {
        self.kind == TokenKind::Section
    }
}
