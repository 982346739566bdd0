use crate::errors::TransformError;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// 画像を指定フォーマットでエンコードする
///
/// quality は JPEG / AVIF のみ有効で、それ以外のフォーマットでは無視される
pub fn encode_image(
    img: &DynamicImage,
    format: ImageFormat,
    quality: u8,
) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            img.to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| encode_failed(format, e))?;
        }
        ImageFormat::WebP => {
            // image クレートの WebP エンコーダはロスレスのみ対応（quality は無視）
            let encoder = WebPEncoder::new_lossless(&mut buf);
            img.write_with_encoder(encoder)
                .map_err(|e| encode_failed(format, e))?;
        }
        ImageFormat::Avif => {
            let encoder = AvifEncoder::new_with_speed_quality(&mut buf, 4, quality);
            img.write_with_encoder(encoder)
                .map_err(|e| encode_failed(format, e))?;
        }
        _ => {
            prepare_for(img, format)
                .write_to(&mut buf, format)
                .map_err(|e| encode_failed(format, e))?;
        }
    }

    Ok(buf.into_inner())
}

/// RGB8 を受け付けないエンコーダ向けに色表現を変換する
fn prepare_for(img: &DynamicImage, format: ImageFormat) -> DynamicImage {
    match format {
        ImageFormat::OpenExr | ImageFormat::Hdr => DynamicImage::ImageRgb32F(img.to_rgb32f()),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(img.to_rgba16()),
        _ => img.clone(),
    }
}

fn encode_failed(format: ImageFormat, e: image::ImageError) -> TransformError {
    TransformError::ProcessingFailed(format!("{format:?} encode failed: {e}"))
}
