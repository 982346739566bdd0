/// エンコード時の品質（JPEG / AVIF のみ有効）
pub const DEFAULT_QUALITY: u8 = 90;

/// ICO フォーマットの最大寸法（幅・高さ）
pub const ICO_MAX_DIMENSION: u32 = 256;
