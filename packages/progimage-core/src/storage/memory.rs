use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;

use super::ImageStore;
use crate::errors::StorageError;

/// プロセス内メモリに画像を保持するストア
///
/// 内容はプロセス終了とともに失われる。
/// 読み取りは共有ロック、書き込みは排他ロックで保護する。
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みオブジェクト数
    pub fn len(&self) -> usize {
        match self.objects.read() {
            Ok(map) => map.len(),
            Err(poisoned) => {
                tracing::warn!("memory store lock poisoned, reading recovered contents");
                poisoned.into_inner().len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Internal("memory store lock poisoned".to_string())
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn put(&self, id: &str, data: Bytes) -> Result<(), StorageError> {
        let mut map = self.objects.write().map_err(poisoned)?;
        map.insert(id.to_string(), data);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Bytes, StorageError> {
        let map = self.objects.read().map_err(poisoned)?;
        map.get(id).cloned().ok_or_else(|| StorageError::NotFound {
            key: id.to_string(),
        })
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("object_count", &self.len())
            .finish()
    }
}
