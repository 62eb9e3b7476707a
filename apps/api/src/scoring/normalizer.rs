//! Text normalization shared by the similarity scorer and the keyword gap finder.

use super::stopwords::StopwordSet;

/// Lowercases `text`, deletes everything that is not `a-z` or a separator,
/// splits on separators and drops stopwords. Surviving tokens are rejoined
/// with single spaces in their original order.
///
/// Characters are deleted rather than replaced, so letters on either side of
/// a removed digit or symbol fuse into one token: `"node.js"` becomes `"nodejs"`.
pub fn clean_text(text: &str, stopwords: &StopwordSet) -> String {
    let letters_only: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || is_separator(*c))
        .collect();

    letters_only
        .split(is_separator)
        .filter(|token| !token.is_empty() && !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F,
/// which some `\s` implementations also count as whitespace.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits cleaned text back into tokens.
pub fn tokens(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        clean_text(text, &StopwordSet::english())
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_only_stopwords_and_punctuation_yields_empty_output() {
        assert_eq!(clean("The, and... for?! -- a  of (the)"), "");
    }

    #[test]
    fn test_lowercases_and_drops_stopwords() {
        assert_eq!(
            clean("Looking for Python and Go developer"),
            "looking python go developer"
        );
    }

    #[test]
    fn test_removed_characters_fuse_adjacent_letters() {
        assert_eq!(clean("Node.js"), "nodejs");
        assert_eq!(clean("COVID19vaccine"), "covidvaccine");
        assert_eq!(clean("COVID-19 response"), "covid response");
    }

    #[test]
    fn test_digits_and_symbols_are_deleted() {
        assert_eq!(clean("5+ years C++ / 2019"), "years c");
    }

    #[test]
    fn test_non_ascii_letters_are_deleted() {
        assert_eq!(clean("café résumé"), "caf rsum");
    }

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(clean("rust\n\tkubernetes   kafka"), "rust kubernetes kafka");
    }

    #[test]
    fn test_information_separators_split_tokens() {
        assert_eq!(clean("a\u{1c}b kafka"), "b kafka");
        assert_eq!(clean("rust\u{1f}go"), "rust go");
    }

    #[test]
    fn test_preserves_token_order_and_duplicates() {
        assert_eq!(clean("rust go rust"), "rust go rust");
    }

    #[test]
    fn test_tokens_splits_cleaned_text() {
        let cleaned = clean("Senior Rust Engineer");
        assert_eq!(tokens(&cleaned).collect::<Vec<_>>(), ["senior", "rust", "engineer"]);
    }
}
