/// Normalized form used for every answer equality check: trimmed and lowercased
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Length in characters, not bytes, so non-ASCII answers compare fairly
pub fn text_length(text: &str) -> usize {
    text.chars().count()
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
