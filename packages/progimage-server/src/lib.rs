//! progimage の HTTP サービス
//!
//! base64 で受け取った画像を検証して保存し、
//! フォーマット変換・サムネイル・回転を適用して配信する。

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod storage;

use std::sync::Arc;

use progimage_core::{FormatRegistry, ImageStore};

pub use config::{ConfigError, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::ImageServer;

/// ハンドラ間で共有する状態
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ImageStore>,
    pub registry: &'static FormatRegistry,
}

impl AppState {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self {
            store,
            registry: FormatRegistry::global(),
        }
    }
}
