use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MusicRecommendation {
    pub artist: String,
    pub song: String,
}

/// Upsert body before validation. Anything unreadable leaves the field empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpsertRecommendation {
    pub artist: Option<String>,
    pub song: Option<String>,
}

impl UpsertRecommendation {
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_owned);
        UpsertRecommendation {
            artist: field("artist"),
            song: field("song"),
        }
    }

    pub fn into_recommendation(self) -> Option<MusicRecommendation> {
        match (self.artist, self.song) {
            (Some(artist), Some(song)) if !artist.is_empty() && !song.is_empty() => {
                Some(MusicRecommendation { artist, song })
            }
            _ => None,
        }
    }
}
