use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::{Settings, StoreBackend};
use crate::models::record::{self, ARTIST_ATTR, WireRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dynamodb request failed: {0}")]
    Transport(#[from] aws_sdk_dynamodb::Error),
    #[error("item is missing string key attribute {0:?}")]
    MissingKey(&'static str),
}

#[async_trait]
pub trait MusicStore: Send + Sync {
    async fn get_item(&self, artist: &str) -> Result<Option<WireRecord>, StoreError>;

    // Unconditional overwrite of any item with the same key.
    async fn put_item(&self, item: WireRecord) -> Result<(), StoreError>;
}

pub async fn connect(settings: &Settings) -> Arc<dyn MusicStore> {
    match settings.store {
        StoreBackend::DynamoDb => Arc::new(Database::new(settings).await),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    }
}

#[derive(Clone)]
pub struct Database {
    client: Client,
    table_name: String,
}

impl Database {
    pub async fn new(settings: &Settings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));
        if let Some(endpoint_url) = &settings.endpoint_url {
            debug!("DYNAMODB_ENDPOINT_URL={}", endpoint_url);
            loader = loader.endpoint_url(endpoint_url);
        }
        let config = loader.load().await;

        Self::from_client(Client::new(&config), settings.table_name.clone())
    }

    pub fn from_client(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl MusicStore for Database {
    async fn get_item(&self, artist: &str) -> Result<Option<WireRecord>, StoreError> {
        debug!("get_item table={} artist={:?}", self.table_name, artist);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(record::key(artist)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(output.item().cloned())
    }

    async fn put_item(&self, item: WireRecord) -> Result<(), StoreError> {
        debug!("put_item table={}", self.table_name);
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }
}

/// Same key schema as the table: one item per `artist`, puts overwrite.
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, WireRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl MusicStore for MemoryStore {
    async fn get_item(&self, artist: &str) -> Result<Option<WireRecord>, StoreError> {
        Ok(self.items.read().await.get(artist).cloned())
    }

    async fn put_item(&self, item: WireRecord) -> Result<(), StoreError> {
        let artist = item
            .get(ARTIST_ATTR)
            .and_then(|value| value.as_s().ok())
            .cloned()
            .ok_or(StoreError::MissingKey(ARTIST_ATTR))?;
        self.items.write().await.insert(artist, item);
        Ok(())
    }
}
