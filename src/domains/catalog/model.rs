//! Playlist and song types.
//!
//! Decoding is strict: every field must be present with the right JSON type
//! and unknown fields are rejected. Nothing is defaulted. The one leniency is
//! the playlist id, which may also be a string holding an integer.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// A single track's display and playback metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Song {
    pub name: String,
    pub lyric: String,
    /// Path or URI of the audio file, usually below `/songs`.
    pub src: String,
    /// Formatted duration such as `3:00`.
    pub length: String,
}

/// An ordered group of songs identified by an integer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Playlist {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub songs: Vec<Song>,
}

/// All playlists decoded from one catalog document, in document order.
///
/// Ids are not checked for uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Playlist>);

impl Catalog {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self(playlists)
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

/// Accept `7` or `"7"`; reject floats, non-numeric strings and null.
///
/// Goes through `Value` rather than an untagged enum so numbers survive
/// `arbitrary_precision`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("playlist id {} is not an integer", n))),
        Value::String(s) => s
            .parse()
            .map_err(|_| D::Error::custom(format!("playlist id {:?} is not an integer", s))),
        other => Err(D::Error::custom(format!(
            "playlist id must be an integer, got {}",
            other
        ))),
    }
}

impl IntoIterator for Catalog {
    type Item = Playlist;
    type IntoIter = std::vec::IntoIter<Playlist>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_playlist_round_trip_keeps_song_order() {
        let input = json!({
            "id": 42,
            "songs": [
                {"name": "B", "lyric": "la", "src": "b.mp3", "length": "1:01"},
                {"name": "A", "lyric": "", "src": "a.mp3", "length": "3:00"}
            ]
        });

        let playlist: Playlist = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(playlist.id, 42);
        assert_eq!(playlist.songs[0].name, "B");
        assert_eq!(playlist.songs[1].name, "A");
        assert_eq!(serde_json::to_value(&playlist).unwrap(), input);
    }

    #[test]
    fn test_empty_songs_is_valid() {
        let playlist: Playlist = serde_json::from_str(r#"{"id":1,"songs":[]}"#).unwrap();
        assert!(playlist.songs.is_empty());
    }

    #[test]
    fn test_missing_song_field_is_rejected() {
        let result: Result<Song, _> =
            serde_json::from_str(r#"{"name":"A","src":"a.mp3","length":"3:00"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_song_field_is_rejected() {
        let result: Result<Song, _> =
            serde_json::from_str(r#"{"name":"A","lyric":null,"src":"a.mp3","length":180}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_playlist_songs_is_rejected() {
        let result: Result<Playlist, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_quoted_integer_id_is_accepted() {
        let playlist: Playlist = serde_json::from_str(r#"{"id":"12","songs":[]}"#).unwrap();
        assert_eq!(playlist.id, 12);

        let playlist: Playlist = serde_json::from_str(r#"{"id":"-3","songs":[]}"#).unwrap();
        assert_eq!(playlist.id, -3);
    }

    #[test]
    fn test_quoted_id_serializes_as_number() {
        let playlist: Playlist = serde_json::from_str(r#"{"id":"5","songs":[]}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&playlist).unwrap(),
            r#"{"id":5,"songs":[]}"#
        );
    }

    #[test]
    fn test_non_integer_id_is_rejected() {
        for doc in [
            r#"{"id":1.5,"songs":[]}"#,
            r#"{"id":"x","songs":[]}"#,
            r#"{"id":"1.5","songs":[]}"#,
            r#"{"id":null,"songs":[]}"#,
            r#"{"id":true,"songs":[]}"#,
            r#"{"id":99999999999999999999,"songs":[]}"#,
        ] {
            let result: Result<Playlist, _> = serde_json::from_str(doc);
            assert!(result.is_err(), "{} should be rejected", doc);
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<Playlist, _> =
            serde_json::from_str(r#"{"id":1,"songs":[],"title":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_is_a_plain_array() {
        let catalog: Catalog =
            serde_json::from_str(r#"[{"id":1,"songs":[]},{"id":2,"songs":[]}]"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.playlists()[1].id, 2);
        assert_eq!(
            serde_json::to_string(&catalog).unwrap(),
            r#"[{"id":1,"songs":[]},{"id":2,"songs":[]}]"#
        );
    }
}
