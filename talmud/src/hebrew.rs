//! Hebrew text normalization.

/// Removes nikud (vowel points and cantillation combining marks) from Hebrew
/// text so the rendered sentences match the unpointed printed page.
pub fn strip_nikud(text: &str) -> String {
    text.chars().filter(|c| !is_nikud(*c)).collect()
}

fn is_nikud(c: char) -> bool {
    matches!(
        c,
        '\u{0591}'..='\u{05BD}'
            | '\u{05BF}'
            | '\u{05C1}'
            | '\u{05C2}'
            | '\u{05C4}'
            | '\u{05C5}'
            | '\u{05C7}'
    )
}
