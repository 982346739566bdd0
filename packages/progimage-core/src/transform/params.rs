use std::collections::HashMap;

use crate::errors::TransformError;
use crate::validation::{parse_rotate_angle, parse_thumbnail_size};

/// クエリパラメータから組み立てたフィルタ指定
///
/// 未知のキーは無視する。適用順序はキーの順序によらず常に
/// thumbnail → rotate。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub thumbnail: Option<u32>,
    pub rotate: Option<i32>,
}

impl FilterSet {
    pub const THUMBNAIL: &'static str = "thumbnail";
    pub const ROTATE: &'static str = "rotate";

    /// クエリパラメータから FilterSet を作成する
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, TransformError> {
        let thumbnail = query
            .get(Self::THUMBNAIL)
            .map(|v| parse_thumbnail_size(v))
            .transpose()?;
        let rotate = query
            .get(Self::ROTATE)
            .map(|v| parse_rotate_angle(v))
            .transpose()?;

        Ok(Self { thumbnail, rotate })
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnail.is_none() && self.rotate.is_none()
    }
}
