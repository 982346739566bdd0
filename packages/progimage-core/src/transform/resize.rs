use crate::errors::TransformError;
use crate::transform::dimensions::calculate_thumbnail_dimensions;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

/// 画像をリサイズする
///
/// fast_image_resize を使用して高品質なリサイズを行う
/// Lanczos3 フィルタを使用
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    if target_w == 0 || target_h == 0 {
        return Err(TransformError::InvalidParams(format!(
            "target dimensions must be non-zero, got {target_w}x{target_h}"
        )));
    }

    let rgb_img = img.to_rgb8();
    let width = rgb_img.width();
    let height = rgb_img.height();

    let src_image = Image::from_vec_u8(width, height, rgb_img.into_raw(), PixelType::U8x3)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x3);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    let resized_rgb = image::RgbImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| {
            TransformError::ProcessingFailed("failed to convert resized image".to_string())
        })?;

    Ok(DynamicImage::ImageRgb8(resized_rgb))
}

/// `size × size` に収まるサムネイルを作成する
///
/// アスペクト比は維持し、元画像より大きくはしない
pub fn thumbnail(img: DynamicImage, size: u32) -> Result<DynamicImage, TransformError> {
    let (src_w, src_h) = (img.width(), img.height());
    let (dst_w, dst_h) = calculate_thumbnail_dimensions(src_w, src_h, size);

    if dst_w == src_w && dst_h == src_h {
        return Ok(img);
    }
    resize_image(&img, dst_w, dst_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_image() {
        let img = DynamicImage::new_rgb8(1000, 1000);
        let resized = resize_image(&img, 500, 500).unwrap();
        assert_eq!(resized.width(), 500);
        assert_eq!(resized.height(), 500);
    }

    #[test]
    fn test_resize_zero_target() {
        let img = DynamicImage::new_rgb8(10, 10);
        assert!(matches!(
            resize_image(&img, 0, 10),
            Err(TransformError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_thumbnail_keeps_aspect_ratio() {
        let img = DynamicImage::new_rgb8(200, 100);
        let thumb = thumbnail(img, 50).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (50, 25));
    }

    #[test]
    fn test_thumbnail_does_not_upscale() {
        let img = DynamicImage::new_rgb8(20, 10);
        let thumb = thumbnail(img, 500).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (20, 10));
    }
}
