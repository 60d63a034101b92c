//! Field tokenizer — positional splitting of raw lines.
//!
//! Neither helper understands quoting. Parsers that need a quoted span
//! reassemble it from a known index range. Neither helper fails; bounds
//! checks belong to the caller.

/// Split on every single space. Consecutive spaces yield empty tokens, so
/// token positions line up with the fixed layout of the line.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// Split on at most `max_splits` occurrences of `delimiter`, leaving the
/// remainder unsplit in the last part.
pub fn split_bounded(line: &str, delimiter: char, max_splits: usize) -> Vec<&str> {
    line.splitn(max_splits + 1, delimiter).collect()
}
