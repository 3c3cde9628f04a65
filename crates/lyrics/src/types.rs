use serde::Deserialize;
use serde_json::Value;
use songmatch_core::Lookup;

/// Body of `POST /api/search-song`
#[derive(Debug, Default, Deserialize)]
pub struct SearchSongRequest {
    #[serde(default)]
    pub lyrics: Option<String>,
}

/// Display fields picked out of a Genius song object
#[derive(Debug, PartialEq, Eq)]
pub struct SongSummary<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub url: &'a str,
}

impl<'a> SongSummary<'a> {
    pub fn from_result(result: &'a Value) -> Self {
        let song = Lookup::new(result);

        Self {
            title: song.key("title").as_str().unwrap_or("unknown"),
            artist: song.key("primary_artist").key("name").as_str().unwrap_or("unknown"),
            url: song.key("url").as_str().unwrap_or("unknown"),
        }
    }
}
