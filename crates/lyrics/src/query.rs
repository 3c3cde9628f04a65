/// Number of leading words sent to Genius
///
/// Full-text search matches short distinctive phrases better than whole
/// verses, so longer input is cut down rather than rejected.
pub const MAX_QUERY_WORDS: usize = 10;

/// Build the Genius search query from raw lyrics
///
/// Returns `None` when the lyrics contain no words.
pub fn search_query(lyrics: &str) -> Option<String> {
    let words: Vec<&str> = lyrics.split_whitespace().take(MAX_QUERY_WORDS).collect();

    if words.is_empty() { None } else { Some(words.join(" ")) }
}
