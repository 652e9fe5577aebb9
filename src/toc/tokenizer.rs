use crate::toc::token::{Token, TokenKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMBER_RE: Regex = Regex::new(r"^[0-9]+$").expect("valid number pattern");
    static ref SECTION_RE: Regex = Regex::new(r"^(?:[0-9]+\.?)+$").expect("valid section pattern");
    static ref TITLE_RE: Regex = Regex::new(r"^[a-zA-Z-]+$").expect("valid title pattern");
}

/// Classifies a single word, first match wins: number, then section, then title.
///
/// Pure digit words are tested first so they never become section labels.
pub fn classify(word: &str) -> Option<TokenKind> {
    if NUMBER_RE.is_match(word) {
        Some(TokenKind::Number)
    } else if SECTION_RE.is_match(word) {
        Some(TokenKind::Section)
    } else if TITLE_RE.is_match(word) {
        Some(TokenKind::Title)
    } else {
        None
    }
}

/// Turns raw words from a page block into tokens.
///
/// Words that fit no class (punctuation, leader dots, mixed noise) are dropped.
/// Surviving tokens keep their input order.
pub fn tokenize<S: AsRef<str>>(words: &[S]) -> Vec<Token> {
    words
        .iter()
        .filter_map(|word| {
            let word: &str = word.as_ref();
            classify(word).map(|kind| Token::new(kind, word))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Some(TokenKind::Number))]
    #[case("007", Some(TokenKind::Number))]
    #[case("1.", Some(TokenKind::Section))]
    #[case("2.3", Some(TokenKind::Section))]
    #[case("4.2.23", Some(TokenKind::Section))]
    #[case("11.", Some(TokenKind::Section))]
    #[case("Introduction", Some(TokenKind::Title))]
    #[case("Multi-threaded", Some(TokenKind::Title))]
    #[case("-", Some(TokenKind::Title))]
    #[case("...", None)]
    #[case(".", None)]
    #[case("", None)]
    #[case("Introduction,", None)]
    #[case("A1", None)]
    #[case(".5", None)]
    #[case("Über", None)]
    #[case("١٢", None)]
    fn test_classify(#[case] word: &str, #[case] expected: Option<TokenKind>) {
        assert_eq!(classify(word), expected);
    }

    #[test]
    fn test_long_digit_run_is_number() {
        let word = "1".repeat(64);
        assert_eq!(classify(&word), Some(TokenKind::Number));
    }

    #[test]
    fn test_tokenize_entry_line() {
        let words = ["1.", "Introduction", "......", "12"];
        let tokens = tokenize(&words);
        assert_eq!(
            tokens,
            vec![
                Token::section("1."),
                Token::title("Introduction"),
                Token::number("12"),
            ]
        );
    }

    #[test]
    fn test_tokenize_drops_noise_without_reordering() {
        let words = vec!["", "2.3", "&", "Design", "x1", "Notes", "", "45"];
        let kinds: Vec<TokenKind> = tokenize(&words).into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Section,
                TokenKind::Title,
                TokenKind::Title,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        let words: Vec<String> = Vec::new();
        assert!(tokenize(&words).is_empty());
    }
}
