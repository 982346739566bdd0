use image::{DynamicImage, Rgb};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

/// 画像を反時計回りに `degrees` 度回転する
///
/// キャンバスサイズは変更しない。はみ出した四隅は切り取られ、
/// 元画像に覆われない領域は黒で埋められる。
pub fn rotate(img: DynamicImage, degrees: i32) -> DynamicImage {
    let angle = degrees.rem_euclid(360);
    let square = img.width() == img.height();

    match angle {
        0 => img,
        180 => img.rotate180(),
        // image クレートの rotate90/270 は時計回り
        90 if square => img.rotate270(),
        270 if square => img.rotate90(),
        _ => rotate_clipped(&img, angle),
    }
}

fn rotate_clipped(img: &DynamicImage, angle: i32) -> DynamicImage {
    // imageproc は時計回りが正
    let theta = -(angle as f32).to_radians();
    let rotated = rotate_about_center(
        &img.to_rgb8(),
        theta,
        Interpolation::Nearest,
        Rgb([0, 0, 0]),
    );
    DynamicImage::ImageRgb8(rotated)
}
