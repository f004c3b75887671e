// config
use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tracing::info;

const DEFAULT_HOST: [u8; 4] = [0, 0, 0, 0];
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TABLE_NAME: &str = "musicTable";
const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
    #[error("MUSIC_STORE must be \"dynamodb\" or \"memory\", got {0:?}")]
    InvalidStore(String),
    #[error("the in-memory store is not allowed in prod mode")]
    MemoryStoreInProd,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: Mode,
    pub host: IpAddr,
    pub port: u16,
    pub table_name: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub store: StoreBackend,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match var("MODE") {
            Some(mode) if mode.to_lowercase() == "prod" => Mode::Prod,
            _ => Mode::Dev,
        };

        let host = match var("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::from(DEFAULT_HOST),
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let store = match var("MUSIC_STORE") {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "dynamodb" => StoreBackend::DynamoDb,
                "memory" => StoreBackend::Memory,
                _ => return Err(ConfigError::InvalidStore(raw)),
            },
            None => match mode {
                Mode::Dev => StoreBackend::Memory,
                Mode::Prod => StoreBackend::DynamoDb,
            },
        };
        if mode == Mode::Prod && store == StoreBackend::Memory {
            return Err(ConfigError::MemoryStoreInProd);
        }

        let settings = Settings {
            mode,
            host,
            port,
            table_name: var("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: var("DYNAMODB_ENDPOINT_URL"),
            store,
        };

        // Log which variables were set (NOT their values!)
        let configured: Vec<&str> = [
            "MODE",
            "HOST",
            "PORT",
            "TABLE_NAME",
            "AWS_REGION",
            "DYNAMODB_ENDPOINT_URL",
            "MUSIC_STORE",
        ]
        .into_iter()
        .filter(|key| var(*key).is_some())
        .collect();
        info!("Settings configured from env: {:?}", configured);

        Ok(settings)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_serve_music_table_on_port_5000() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings.mode, Mode::Dev);
        assert_eq!(settings.bind_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(settings.table_name, "musicTable");
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.endpoint_url, None);
        assert_eq!(settings.store, StoreBackend::Memory);
    }

    #[test]
    fn prod_defaults_to_dynamodb() {
        let settings = settings_from(&[("MODE", "PROD")]).unwrap();
        assert_eq!(settings.mode, Mode::Prod);
        assert_eq!(settings.store, StoreBackend::DynamoDb);
    }

    #[test]
    fn prod_rejects_memory_store() {
        let err = settings_from(&[("MODE", "prod"), ("MUSIC_STORE", "memory")]).unwrap_err();
        assert_eq!(err, ConfigError::MemoryStoreInProd);
    }

    #[test]
    fn overrides_are_applied() {
        let settings = settings_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("TABLE_NAME", "songs"),
            ("AWS_REGION", "eu-west-1"),
            ("DYNAMODB_ENDPOINT_URL", "http://localhost:8000"),
            ("MUSIC_STORE", "DynamoDB"),
        ])
        .unwrap();
        assert_eq!(settings.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(settings.table_name, "songs");
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(settings.store, StoreBackend::DynamoDb);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let settings = settings_from(&[("PORT", ""), ("TABLE_NAME", "  ")]).unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.table_name, "musicTable");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            settings_from(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort("http".to_string())
        );
        assert_eq!(
            settings_from(&[("HOST", "localhost")]).unwrap_err(),
            ConfigError::InvalidHost("localhost".to_string())
        );
        assert_eq!(
            settings_from(&[("MUSIC_STORE", "redis")]).unwrap_err(),
            ConfigError::InvalidStore("redis".to_string())
        );
    }
}
