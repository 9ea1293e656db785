//! Text segmentation: word-respecting line chunks for the writer and
//! paragraph/sentence units for oversized translation requests.

/// Maximum width, in characters, of a string literal on one output line.
pub const LINE_WIDTH: usize = 70;

/// Splits `text` into chunks of at most `max_len` characters, breaking only
/// after a space or a newline.
///
/// Separators stay at the end of the chunk they close, so the chunks
/// concatenate back to `text` exactly. A run with no break point that is
/// longer than `max_len` occupies a chunk of its own.
pub fn split_into_chunks(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for piece in text.split_inclusive(is_break) {
        let piece_len = piece.chars().count();
        if !current.is_empty() && current_len + piece_len > max_len {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(piece);
        current_len += piece_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Characters a wrapped line may end after.
pub fn is_break(c: char) -> bool {
    c == ' ' || c == '\n'
}

/// Splits on blank-line paragraph breaks (`\n\n`). Empty paragraphs are kept
/// so joining with `\n\n` restores the input.
pub fn split_into_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").collect()
}

/// Splits on `". "`; every sentence but the last keeps its terminating period.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split(". ").collect();
    let last = parts.len() - 1;
    parts
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| {
            if i < last {
                format!("{}.", sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_into_chunks("Hello world", 70), vec!["Hello world"]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(split_into_chunks("", 70).is_empty());
        assert_eq!(split_into_chunks("   \n ", 70), vec!["   \n "]);
    }

    #[test]
    fn test_chunks_respect_width_and_words() {
        let text = "The quick brown fox jumps over the lazy dog and keeps running far away";
        let chunks = split_into_chunks(text, 20);
        assert_eq!(
            chunks,
            vec![
                "The quick brown fox ",
                "jumps over the lazy ",
                "dog and keeps ",
                "running far away"
            ]
        );
        assert!(chunks.iter().all(|c| c.chars().count() <= 20));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        // "aaaa bbbb " is exactly ten characters
        assert_eq!(split_into_chunks("aaaa bbbb cc", 10), vec!["aaaa bbbb ", "cc"]);
    }

    #[test]
    fn test_overlong_word_gets_own_chunk() {
        let long = "x".repeat(80);
        let text = format!("before {} after", long);
        let chunks = split_into_chunks(&text, 70);
        assert_eq!(
            chunks,
            vec!["before ".to_string(), format!("{} ", long), "after".to_string()]
        );
    }

    #[test]
    fn test_newlines_tabs_and_space_runs_survive() {
        let text = "first line\nsecond\tline  with  gaps\n";
        let chunks = split_into_chunks(text, 12);
        assert_eq!(
            chunks,
            vec!["first line\n", "second\tline ", " with  gaps\n"]
        );
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let chunks = split_into_chunks("éééé éééé", 9);
        assert_eq!(chunks, vec!["éééé éééé"]);
    }

    #[test]
    fn test_paragraphs_keep_empty_parts() {
        assert_eq!(
            split_into_paragraphs("one\n\ntwo\n\n\n\nthree"),
            vec!["one", "two", "", "three"]
        );
    }

    #[test]
    fn test_sentences_keep_periods() {
        assert_eq!(
            split_into_sentences("First one. Second one. Last"),
            vec!["First one.", "Second one.", "Last"]
        );
        assert_eq!(split_into_sentences("No break here"), vec!["No break here"]);
    }
}
