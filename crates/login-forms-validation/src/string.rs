//! Name validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII letters plus the Latin-1 block U+00C0..=U+00FF
static ONLY_LETTERS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÿ]+$").expect("letters pattern is valid"));

/// Whitespace as browsers treat it in `\s`: Unicode `White_Space` plus the
/// byte order mark U+FEFF, minus NEL U+0085
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

/// Splits a value on runs of whitespace, dropping empty tokens
pub fn name_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_separator).filter(|token| !token.is_empty())
}

/// At least a first name and a surname
pub fn has_first_and_last_name(value: &str) -> bool {
    name_tokens(value).nth(1).is_some()
}

/// Letters only, no digits or punctuation
pub fn is_only_letters(token: &str) -> bool {
    ONLY_LETTERS_REGEX.is_match(token)
}

pub fn all_tokens_are_letters(value: &str) -> bool {
    name_tokens(value).all(is_only_letters)
}

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_tokens() {
        assert_eq!(name_tokens("  John   Smith  ").collect::<Vec<_>>(), vec!["John", "Smith"]);
        assert_eq!(name_tokens("   ").count(), 0);
        assert_eq!(name_tokens("John\tSmith\nJr").count(), 3);
    }

    #[test]
    fn test_byte_order_mark_separates_names() {
        assert_eq!(name_tokens("John\u{FEFF}Smith").collect::<Vec<_>>(), vec!["John", "Smith"]);
        assert!(has_first_and_last_name("\u{FEFF}John\u{FEFF}Smith\u{FEFF}"));
        assert!(has_first_and_last_name("John\u{00A0}Smith"));
    }

    #[test]
    fn test_next_line_is_not_a_separator() {
        assert!(!is_separator('\u{0085}'));
        assert!(!has_first_and_last_name("John\u{0085}Smith"));
    }

    #[test]
    fn test_first_and_last_name() {
        assert!(has_first_and_last_name("John Smith"));
        assert!(!has_first_and_last_name("John"));
        assert!(!has_first_and_last_name(""));
    }

    #[test]
    fn test_only_letters() {
        assert!(is_only_letters("João"));
        assert!(is_only_letters("Müller"));
        assert!(!is_only_letters("John3"));
        assert!(!is_only_letters("O'Neil"));
        assert!(!is_only_letters("Ana-Maria"));
        assert!(!is_only_letters(""));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("ção"), 3);
        assert_eq!("ção".len(), 5);
    }
}
