use std::collections::HashMap;

use bytes::Bytes;
use image::ImageFormat;

use crate::constants::{DEFAULT_QUALITY, ICO_MAX_DIMENSION};
use crate::errors::{MediaError, TransformError};
use crate::storage::ImageStore;
use crate::transform::{
    apply_filters, decode_and_verify, encode_image, thumbnail, to_rgb, FilterSet,
    FormatRegistry,
};
use crate::validation::parse_filename;

/// 配信用にエンコード済みの画像
#[derive(Debug, Clone)]
pub struct ServedImage {
    pub body: Bytes,
    pub content_type: &'static str,
    /// リクエストされたファイル名（大文字小文字はそのまま）
    pub filename: String,
}

impl ServedImage {
    /// Content-Disposition ヘッダの値
    pub fn content_disposition(&self) -> String {
        format!("inline; filename=\"{}\"", self.filename)
    }
}

/// 保存済み画像を指定フォーマット・フィルタで変換して返す
///
/// 拡張子の検証はストレージへアクセスする前に行う。
/// 元画像は変更せず、デコードしたコピーに対してのみフィルタを適用する。
pub async fn serve(
    store: &dyn ImageStore,
    registry: &FormatRegistry,
    filename: &str,
    query: &HashMap<String, String>,
) -> Result<ServedImage, MediaError> {
    let (id, extension) = parse_filename(filename)?;

    let entry = registry.lookup(&extension).ok_or_else(|| {
        MediaError::validation(format!("Unsupported image format: {extension}"))
    })?;

    let original = store.get(&id).await?;
    let filters = FilterSet::from_query(query)?;

    tracing::info!(
        id = %id,
        format = ?entry.format,
        thumbnail = ?filters.thumbnail,
        rotate = ?filters.rotate,
        "rendering image"
    );

    let body = render(&original, entry.format, &filters)?;

    Ok(ServedImage {
        body: Bytes::from(body),
        content_type: entry.mime_type,
        filename: filename.to_string(),
    })
}

/// 元画像のバイト列をデコード → RGB 変換 → フィルタ → エンコードする
pub fn render(
    original: &[u8],
    format: ImageFormat,
    filters: &FilterSet,
) -> Result<Vec<u8>, TransformError> {
    // 保存済みの画像は登録時に検証済みなので、ここでの失敗はサーバ側の問題
    let img = decode_and_verify(original).map_err(|e| {
        TransformError::ProcessingFailed(format!("stored image is not decodable: {e}"))
    })?;

    let mut img = apply_filters(to_rgb(img), filters)?;

    // ICO は 256px を超える画像を格納できないため収まるよう縮小する
    if format == ImageFormat::Ico {
        img = thumbnail(img, ICO_MAX_DIMENSION)?;
    }

    encode_image(&img, format, DEFAULT_QUALITY)
}
