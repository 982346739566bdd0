use thiserror::Error;

/// 画像処理パイプラインの統合エラー型
#[derive(Debug, Error)]
pub enum MediaError {
    /// クライアント入力の誤り（不正なリクエスト、未対応フォーマットなど）
    #[error("{0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

impl MediaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// ストレージアクセスエラー
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{key}")]
    NotFound { key: String },

    #[error("storage error: {0}")]
    Internal(String),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("invalid image: {0}")]
    Decode(String),

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
