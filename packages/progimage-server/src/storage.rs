use std::sync::Arc;

use progimage_core::{ImageStore, MemoryStore, ObjectStoreStorage, StorageError};

use crate::config::ServerConfig;

/// 設定に応じてストレージバックエンドを作成する
///
/// バケット名が設定されていればオブジェクトストレージ、なければメモリ
pub fn build_store(config: &ServerConfig) -> Result<Arc<dyn ImageStore>, StorageError> {
    match config.bucket.as_deref() {
        Some(bucket) => {
            tracing::info!(bucket = %bucket, "using object store backend");
            Ok(Arc::new(ObjectStoreStorage::s3(bucket)?))
        }
        None => {
            tracing::info!("using in-memory backend");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
