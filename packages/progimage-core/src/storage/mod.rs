pub mod client;
pub mod memory;

use async_trait::async_trait;
use bytes::Bytes;

pub use client::ObjectStoreStorage;
pub use memory::MemoryStore;
// StorageError は errors モジュールで定義済み
pub use crate::errors::StorageError;

/// 画像の保存先
///
/// 識別子をキーとした不透明なバイト列の put / get のみを提供する。
/// 保存されたバイト列は書き込み後に変更されない。
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// 識別子に対してバイト列を保存する
    async fn put(&self, id: &str, data: Bytes) -> Result<(), StorageError>;

    /// 識別子のバイト列を取得する。存在しない場合は `NotFound`
    async fn get(&self, id: &str) -> Result<Bytes, StorageError>;
}
