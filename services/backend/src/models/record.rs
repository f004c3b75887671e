//! Conversion between [`MusicRecommendation`] and the store's typed-attribute
//! item shape, `{"artist": {"S": ..}, "song": {"S": ..}}`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::models::recommendation::MusicRecommendation;

pub const ARTIST_ATTR: &str = "artist";
pub const SONG_ATTR: &str = "song";

pub type WireRecord = HashMap<String, AttributeValue>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("stored record has no usable string attribute {attribute:?}")]
pub struct MalformedRecordError {
    pub attribute: &'static str,
}

pub fn key(artist: &str) -> WireRecord {
    HashMap::from([(ARTIST_ATTR.to_string(), AttributeValue::S(artist.to_string()))])
}

pub fn encode(rec: &MusicRecommendation) -> WireRecord {
    HashMap::from([
        (ARTIST_ATTR.to_string(), AttributeValue::S(rec.artist.clone())),
        (SONG_ATTR.to_string(), AttributeValue::S(rec.song.clone())),
    ])
}

pub fn decode(record: &WireRecord) -> Result<MusicRecommendation, MalformedRecordError> {
    Ok(MusicRecommendation {
        artist: string_attr(record, ARTIST_ATTR)?,
        song: string_attr(record, SONG_ATTR)?,
    })
}

fn string_attr(record: &WireRecord, attribute: &'static str) -> Result<String, MalformedRecordError> {
    match record.get(attribute).map(AttributeValue::as_s) {
        Some(Ok(value)) => Ok(value.clone()),
        _ => Err(MalformedRecordError { attribute }),
    }
}
