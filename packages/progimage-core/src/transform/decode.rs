use crate::errors::TransformError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// マジックナンバーを持たず、内容から推測できないフォーマット
const UNSIGNED_FORMATS: &[ImageFormat] = &[ImageFormat::Tga];

/// バイト列を完全にデコードして検証する
///
/// ヘッダだけでなくピクセルデータまで読み込むため、途中で切れたデータや
/// 破損したデータはここでエラーになる。
pub fn decode_and_verify(data: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(format!("failed to guess format: {e}")))?;

    if reader.format().is_none() {
        return decode_unsigned(data);
    }

    reader
        .decode()
        .map_err(|e| TransformError::Decode(format!("decode failed: {e}")))
}

/// 推測できなかったデータを、シグネチャのないフォーマットとして順に試す
fn decode_unsigned(data: &[u8]) -> Result<DynamicImage, TransformError> {
    UNSIGNED_FORMATS
        .iter()
        .filter(|format| format.reading_enabled())
        .find_map(|&format| image::load_from_memory_with_format(data, format).ok())
        .ok_or_else(|| TransformError::Decode("unsupported image format".to_string()))
}

/// 元のカラーモードに関わらず RGB8 に変換する（アルファは破棄）
pub fn to_rgb(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
