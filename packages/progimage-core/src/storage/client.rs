use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};

use super::ImageStore;
use crate::errors::StorageError;

/// オブジェクトストレージ（S3 互換）に画像を保存するストア
///
/// 識別子をそのままオブジェクトキーとして使用する。
/// 取得時のクライアントエラーはすべて `NotFound` に正規化し、
/// 詳細はログにのみ出力する。
#[derive(Clone)]
pub struct ObjectStoreStorage {
    bucket: String,
    client: Arc<dyn ObjectStore>,
}

impl ObjectStoreStorage {
    /// 任意の ObjectStore 実装から作成する
    pub fn new(bucket: impl Into<String>, client: Arc<dyn ObjectStore>) -> Self {
        Self {
            bucket: bucket.into(),
            client,
        }
    }

    /// 指定バケットの S3 クライアントを作成する
    ///
    /// 認証情報・リージョンは AWS 標準の環境変数から読み込む
    /// （AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_REGION など）
    pub fn s3(bucket: &str) -> Result<Self, StorageError> {
        let client = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| StorageError::Internal(format!("failed to build S3 client: {e}")))?;

        Ok(Self::new(bucket, Arc::new(client)))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ImageStore for ObjectStoreStorage {
    async fn put(&self, id: &str, data: Bytes) -> Result<(), StorageError> {
        let size = data.len();
        self.client
            .put(&Path::from(id), PutPayload::from(data))
            .await
            .map_err(|e| {
                tracing::error!(bucket = %self.bucket, key = %id, error = %e, "failed to put object");
                StorageError::Internal(e.to_string())
            })?;

        tracing::debug!(bucket = %self.bucket, key = %id, size, "object stored");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Bytes, StorageError> {
        let not_found = || StorageError::NotFound {
            key: id.to_string(),
        };

        let result = match self.client.get(&Path::from(id)).await {
            Ok(result) => result.bytes().await,
            Err(e) => Err(e),
        };

        match result {
            Ok(data) => Ok(data),
            Err(object_store::Error::NotFound { .. }) => {
                tracing::warn!(bucket = %self.bucket, key = %id, "object not found");
                Err(not_found())
            }
            Err(e) => {
                // 互換性のため 404 として返すが、原因はログに残す
                tracing::error!(bucket = %self.bucket, key = %id, error = %e, "failed to get object");
                Err(not_found())
            }
        }
    }
}

impl std::fmt::Debug for ObjectStoreStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStoreStorage")
            .field("bucket", &self.bucket)
            .field("client", &self.client)
            .finish()
    }
}
