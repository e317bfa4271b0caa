//! Genre list encoding
//!
//! Genres are stored as one bracketed comma string: `["Jazz", "Pop"]` is
//! stored as `"[Jazz,Pop]"`.

/// Encode a genre list for storage
pub fn encode_genres(genres: &[String]) -> String {
    format!("[{}]", genres.join(","))
}

/// Parse a stored genre string back into a list
///
/// Strips one leading `[` and one trailing `]` when present, then splits on
/// commas. Tokens are trimmed and empty tokens dropped, so `"[]"`, `""` and an
/// unbracketed `"Jazz,Pop"` all parse without losing characters.
pub fn parse_genres(stored: &str) -> Vec<String> {
    let inner = stored.strip_prefix('[').unwrap_or(stored);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}
