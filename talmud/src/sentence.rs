//! Heuristic sentence splitter.
//!
//! Splits on whitespace that follows a sentence-terminal mark (`.`, `!`, `?`).
//! This is an approximation: abbreviations, quoted punctuation, and non-Latin
//! sentence-final marks are not handled specially, and Hebrew text goes through
//! the same ASCII-punctuation rule.

/// Splits a paragraph into trimmed, non-empty sentence fragments.
/// Empty input yields an empty list. Splitting an already-split sentence is a
/// no-op apart from trimming.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_terminal = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() && prev_terminal {
            push_fragment(&mut sentences, &text[start..i]);
            start = i;
        }
        prev_terminal = matches!(c, '.' | '!' | '?');
    }
    push_fragment(&mut sentences, &text[start..]);
    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
