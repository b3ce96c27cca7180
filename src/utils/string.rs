//! String helpers for report text

/// `word` with an `s` appended unless `count` is exactly one
pub fn pluralize(word: &str, count: usize) -> String {
    match count {
        1 => word.to_string(),
        _ => format!("{word}s"),
    }
}
