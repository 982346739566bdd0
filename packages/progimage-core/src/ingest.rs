use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::MediaError;
use crate::storage::ImageStore;
use crate::transform::decode_and_verify;

/// 画像登録リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
}

/// 登録レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResponse {
    pub id: String,
}

/// 画像データの取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Base64,
    /// 未実装（常にエラー）
    Url,
    /// 未実装（常にエラー）
    Uuid,
}

impl RequestType {
    pub fn parse(s: &str) -> Result<Self, MediaError> {
        match s {
            "base64" => Ok(Self::Base64),
            "url" => Ok(Self::Url),
            "uuid" => Ok(Self::Uuid),
            other => Err(MediaError::validation(format!(
                "Unknown request type: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Url => "url",
            Self::Uuid => "uuid",
        }
    }
}

impl ImageRequest {
    /// JSON ボディからリクエストを読み取る
    ///
    /// JSON として不正な場合や `type` / `data` が欠けている場合は "Invalid request"
    pub fn from_json(body: &[u8]) -> Result<Self, MediaError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "failed to parse image request");
            MediaError::validation("Invalid request")
        })
    }

    /// リクエスト種別に応じて画像バイト列を読み込む
    pub fn load(&self) -> Result<Bytes, MediaError> {
        match RequestType::parse(&self.kind)? {
            RequestType::Base64 => load_from_base64(&self.data),
            kind @ (RequestType::Url | RequestType::Uuid) => Err(MediaError::validation(
                format!("Request type is not implemented yet: {}", kind.as_str()),
            )),
        }
    }
}

/// Base64 文字列をデコードする
///
/// 空白・改行は無視し、`data:<mime>;base64,` 形式の接頭辞があれば取り除く
fn load_from_base64(data: &str) -> Result<Bytes, MediaError> {
    let payload = match data.find(";base64,") {
        Some(pos) if data.starts_with("data:") => &data[pos + 8..],
        _ => data,
    };

    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    general_purpose::STANDARD
        .decode(cleaned.as_bytes())
        .map(Bytes::from)
        .map_err(|e| MediaError::validation(format!("Invalid base64 data: {e}")))
}

/// 画像を検証して保存し、新しい識別子を返す
///
/// 保存するのは受け取った元のバイト列そのもの（再エンコードしない）。
/// 検証に失敗した場合は何も保存しない。
pub async fn ingest(store: &dyn ImageStore, request: &ImageRequest) -> Result<String, MediaError> {
    let data = request.load()?;
    let id = Uuid::new_v4().to_string();

    let img = decode_and_verify(&data)?;
    tracing::info!(
        id = %id,
        width = img.width(),
        height = img.height(),
        size = data.len(),
        "image verified"
    );

    store.put(&id, data).await?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransformError;
    use crate::storage::MemoryStore;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn png_base64(width: u32, height: u32) -> (Vec<u8>, String) {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::new_rgb8(width, height)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        let raw = buf.into_inner();
        let encoded = general_purpose::STANDARD.encode(&raw);
        (raw, encoded)
    }

    fn request(kind: &str, data: &str) -> ImageRequest {
        ImageRequest {
            kind: kind.to_string(),
            data: data.to_string(),
        }
    }

    fn message(err: MediaError) -> String {
        match err {
            MediaError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json() {
        let req = ImageRequest::from_json(br#"{"type":"base64","data":"AAAA"}"#).unwrap();
        assert_eq!(req.kind, "base64");
        assert_eq!(req.data, "AAAA");
    }

    #[test]
    fn test_from_json_missing_fields() {
        let bodies: [&[u8]; 4] = [
            br#"{"type":"base64"}"#,
            br#"{"data":"AAAA"}"#,
            b"not json",
            br#"{"type":1,"data":"AAAA"}"#,
        ];
        for body in bodies {
            let err = ImageRequest::from_json(body).unwrap_err();
            assert_eq!(message(err), "Invalid request");
        }
    }

    #[test]
    fn test_unimplemented_types() {
        let err = request("url", "http://example.com/a.png").load().unwrap_err();
        assert_eq!(message(err), "Request type is not implemented yet: url");

        let err = request("uuid", "abc").load().unwrap_err();
        assert_eq!(message(err), "Request type is not implemented yet: uuid");
    }

    #[test]
    fn test_unknown_type() {
        let err = request("ftp", "abc").load().unwrap_err();
        assert_eq!(message(err), "Unknown request type: ftp");
    }

    #[test]
    fn test_base64_variants() {
        assert_eq!(&load_from_base64("aGVsbG8=").unwrap()[..], b"hello");
        assert_eq!(&load_from_base64("aGVs\nbG8=").unwrap()[..], b"hello");
        assert_eq!(
            &load_from_base64("data:image/png;base64,aGVsbG8=").unwrap()[..],
            b"hello"
        );
        assert!(load_from_base64("!!!not base64").is_err());
    }

    #[tokio::test]
    async fn test_ingest_stores_original_bytes() {
        let store = MemoryStore::new();
        let (raw, encoded) = png_base64(100, 100);

        let id = ingest(&store, &request("base64", &encoded)).await.unwrap();

        assert!(Uuid::parse_str(&id).is_ok());
        let stored = store.get(&id).await.unwrap();
        assert_eq!(&stored[..], &raw[..]);
    }

    #[tokio::test]
    async fn test_ingest_rejects_non_image() {
        let store = MemoryStore::new();
        let encoded = general_purpose::STANDARD.encode(b"just some text");

        let err = ingest(&store, &request("base64", &encoded)).await.unwrap_err();
        assert!(matches!(err, MediaError::Transform(TransformError::Decode(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_rejects_bad_base64() {
        let store = MemoryStore::new();
        let err = ingest(&store, &request("base64", "%%%")).await.unwrap_err();
        assert!(matches!(err, MediaError::Validation(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_generates_distinct_ids() {
        let store = MemoryStore::new();
        let (_, encoded) = png_base64(4, 4);
        let req = request("base64", &encoded);

        let a = ingest(&store, &req).await.unwrap();
        let b = ingest(&store, &req).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
