use image::DynamicImage;

use crate::errors::TransformError;
use crate::transform::params::FilterSet;
use crate::transform::resize::thumbnail;
use crate::transform::rotate::rotate;

/// フィルタを固定順序（thumbnail → rotate）で適用する
pub fn apply_filters(img: DynamicImage, filters: &FilterSet) -> Result<DynamicImage, TransformError> {
    let mut img = img;

    if let Some(size) = filters.thumbnail {
        img = thumbnail(img, size)?;
    }

    if let Some(angle) = filters.rotate {
        img = rotate(img, angle);
    }

    Ok(img)
}
