//! Input tokenization for the REPL.

/// Splits a raw input line into lowercase words.
///
/// Leading, trailing, and repeated whitespace is ignored; an all-whitespace
/// line yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
