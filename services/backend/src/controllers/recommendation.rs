use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    db::MusicStore,
    error::ApiError,
    models::{MusicRecommendation, UpsertRecommendation, record},
};

#[derive(Clone)]
pub struct RecommendationController {
    store: Arc<dyn MusicStore>,
}

impl RecommendationController {
    pub fn new(store: Arc<dyn MusicStore>) -> Self {
        RecommendationController { store }
    }

    pub async fn lookup(&self, artist: &str) -> Result<MusicRecommendation, ApiError> {
        debug!("lookup artist={:?}", artist);
        let item = self.store.get_item(artist).await?.ok_or(ApiError::NotFound)?;

        record::decode(&item).map_err(|e| {
            warn!("Ignoring stored item for artist {:?}: {}", artist, e);
            ApiError::NotFound
        })
    }

    pub async fn upsert(
        &self,
        payload: UpsertRecommendation,
    ) -> Result<MusicRecommendation, ApiError> {
        let rec = payload.into_recommendation().ok_or(ApiError::Validation)?;

        debug!("upsert artist={:?} song={:?}", rec.artist, rec.song);
        self.store.put_item(record::encode(&rec)).await?;

        Ok(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use aws_sdk_dynamodb::types::AttributeValue;

    fn payload(artist: Option<&str>, song: Option<&str>) -> UpsertRecommendation {
        UpsertRecommendation {
            artist: artist.map(str::to_owned),
            song: song.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn upsert_then_lookup_returns_the_song() {
        let controller = RecommendationController::new(Arc::new(MemoryStore::new()));
        let saved = controller
            .upsert(payload(Some("Radiohead"), Some("Karma Police")))
            .await
            .unwrap();
        assert_eq!(controller.lookup("Radiohead").await.unwrap(), saved);
    }

    #[tokio::test]
    async fn invalid_upsert_writes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let controller = RecommendationController::new(store.clone());

        let err = controller.upsert(payload(Some("Radiohead"), None)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation));
        let err = controller.upsert(payload(Some(""), Some("Creep"))).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn malformed_item_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        store.put_item(record::key("Radiohead")).await.unwrap();
        let controller = RecommendationController::new(store);

        let err = controller.lookup("Radiohead").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn non_string_song_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let mut item = record::key("Radiohead");
        item.insert("song".to_string(), AttributeValue::Bool(true));
        store.put_item(item).await.unwrap();
        let controller = RecommendationController::new(store);

        assert!(matches!(controller.lookup("Radiohead").await, Err(ApiError::NotFound)));
    }
}
