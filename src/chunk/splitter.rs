//! Word-boundary splitting with overlap between adjacent pieces

/// Estimated token count: one token per four characters
///
/// This is a fixed heuristic, not a tokenizer; chunk boundaries depend on it.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4
}

/// Number of trailing words carried into the next piece
pub fn overlap_len(closed_words: usize) -> usize {
    closed_words.div_ceil(5).max(1)
}

/// Splits text at word boundaries into pieces shorter than `max_chars`
///
/// Each piece after the first starts with the last fifth (rounded up, at
/// least one) of the previous piece's words. A word that alone would not
/// fit is cut into character runs first.
///
/// ```
/// use adk_docs_crawler::chunk::split_text;
///
/// let pieces = split_text("alpha beta gamma delta epsilon", 14);
/// assert_eq!(pieces, vec!["alpha beta", "beta gamma", "gamma delta", "delta epsilon"]);
/// ```
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(2);
    let mut pieces = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_len = 0;
    let mut fresh = 0;

    for word in words(text, max_chars - 1) {
        let word_len = word.chars().count() + 1;

        if current_len + word_len > max_chars && fresh > 0 {
            pieces.push(current.join(" "));
            let keep = overlap_len(current.len()).min(current.len());
            current.drain(..current.len() - keep);
            current_len = current.iter().map(|w| w.chars().count() + 1).sum();
            fresh = 0;
        }

        while current_len + word_len > max_chars && !current.is_empty() {
            let dropped = current.remove(0);
            current_len -= dropped.chars().count() + 1;
        }

        current.push(word);
        current_len += word_len;
        fresh += 1;
    }

    if !current.is_empty() {
        pieces.push(current.join(" "));
    }

    pieces
}

/// Whitespace-separated words, with words over `max_word` characters cut up
fn words(text: &str, max_word: usize) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().flat_map(move |word| {
        let chars: Vec<char> = word.chars().collect();
        chars
            .chunks(max_word.max(1))
            .map(|run| run.iter().collect::<String>())
            .collect::<Vec<_>>()
    })
}
