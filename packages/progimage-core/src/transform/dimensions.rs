/// 縮小倍率を計算する（拡大しない）
///
/// アスペクト比を維持しつつ `max_w × max_h` に収まる最大の倍率を返す（最大1.0）
fn calculate_scale_factor(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> f64 {
    let scale_w = max_w as f64 / src_w as f64;
    let scale_h = max_h as f64 / src_h as f64;

    scale_w.min(scale_h).min(1.0)
}

/// 倍率を適用して新しい寸法を計算する
fn apply_scale(src_w: u32, src_h: u32, scale: f64) -> (u32, u32) {
    let new_w = (src_w as f64 * scale).round() as u32;
    let new_h = (src_h as f64 * scale).round() as u32;

    // 最小1pxを保証
    (new_w.max(1), new_h.max(1))
}

/// サムネイルの寸法を計算する
///
/// `size × size` の正方形に収まるよう縮小した寸法を返す。
/// 元画像が既に収まっている場合はそのままの寸法を返す。
pub fn calculate_thumbnail_dimensions(src_w: u32, src_h: u32, size: u32) -> (u32, u32) {
    if src_w == 0 || src_h == 0 {
        return (src_w, src_h);
    }
    let scale = calculate_scale_factor(src_w, src_h, size, size);
    let (w, h) = apply_scale(src_w, src_h, scale);

    // 丸め誤差で上限を超えないようにする
    (w.min(size.max(1)), h.min(size.max(1)))
}
