use std::net::SocketAddr;

use thiserror::Error;

pub const BUCKET_ENV: &str = "S3_BUCKET_NAME";
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";
pub const MAX_BODY_BYTES_ENV: &str = "MAX_BODY_BYTES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// 環境変数から読み込むサーバ設定
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// 設定されている場合はオブジェクトストレージを使用する
    pub bucket: Option<String>,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            bucket: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// 環境変数から ServerConfig を作成する
    ///
    /// - S3_BUCKET_NAME（任意）
    /// - BIND_ADDR（デフォルト 0.0.0.0:8000）
    /// - MAX_BODY_BYTES（デフォルト 10MiB）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bucket = lookup(BUCKET_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let bind_addr = lookup(BIND_ADDR_ENV)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: BIND_ADDR_ENV,
            value: bind_addr.clone(),
        })?;

        let max_body_bytes = match lookup(MAX_BODY_BYTES_ENV) {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: MAX_BODY_BYTES_ENV,
                value: v.clone(),
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            bind_addr,
            bucket,
            max_body_bytes,
        })
    }
}
