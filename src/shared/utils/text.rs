/// Number of words kept by [`truncate_summary`]
pub const PREVIEW_WORDS: usize = 10;

/// Preview of a summary for the result list: the first ten space-separated
/// words followed by `...`, or the text unchanged when it is not longer.
///
/// Only single spaces separate words, so runs of spaces count as empty words
/// and newlines stay inside a word.
pub fn truncate_summary(summary: &str) -> String {
    let words: Vec<&str> = summary.split(' ').collect();
    if words.len() > PREVIEW_WORDS {
        format!("{}...", words[..PREVIEW_WORDS].join(" "))
    } else {
        summary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_words_are_cut() {
        assert_eq!(truncate_summary("a b c d e f g h i j k"), "a b c d e f g h i j...");
    }

    #[test]
    fn test_ten_words_or_less_unchanged() {
        assert_eq!(truncate_summary("a b c d e f g h i j"), "a b c d e f g h i j");
        assert_eq!(truncate_summary("short summary"), "short summary");
        assert_eq!(truncate_summary(""), "");
    }

    #[test]
    fn test_double_spaces_count_as_words() {
        // 9 letters + one empty word from the double space = 10 pieces
        assert_eq!(truncate_summary("a b c d e f g h  i"), "a b c d e f g h  i");
        assert_eq!(truncate_summary("a  b c d e f g h i j"), "a  b c d e f g h i...");
    }

    #[test]
    fn test_newlines_do_not_split() {
        let text = "Subjective:\nclient reports improved sleep";
        assert_eq!(truncate_summary(text), text);
    }
}
