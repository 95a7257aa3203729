/// Count words in rendered text: split on runs of whitespace and drop
/// empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Status-bar readout, e.g. "412 words".
pub fn word_count_label(count: usize) -> String {
    format!("{} words", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_whitespace_runs() {
        assert_eq!(count_words("Hello   world\nfoo"), 3);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t  "), 0);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        assert_eq!(count_words("  one two  "), 2);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert_eq!(count_words("Vancouver, BC (Remote) Software Engineer"), 5);
    }

    #[test]
    fn test_label() {
        assert_eq!(word_count_label(0), "0 words");
        assert_eq!(word_count_label(3), "3 words");
    }
}
