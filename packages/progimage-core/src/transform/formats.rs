use std::collections::HashMap;

use image::ImageFormat;
use once_cell::sync::Lazy;

static REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::new);

/// 拡張子に対応するコーデックと MIME タイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatEntry {
    pub format: ImageFormat,
    pub mime_type: &'static str,
}

/// 拡張子 → フォーマットの対応表
///
/// image クレートが読み込み・書き出しの両方に対応しているフォーマットのみ登録する。
/// 起動時に一度だけ構築し、以降は読み取り専用で共有する。
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    entries: HashMap<String, FormatEntry>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        for format in ImageFormat::all() {
            if !(format.reading_enabled() && format.writing_enabled()) {
                continue;
            }
            let entry = FormatEntry {
                format,
                mime_type: format.to_mime_type(),
            };
            for ext in format.extensions_str() {
                entries.insert(ext.to_ascii_lowercase(), entry);
            }
        }

        Self { entries }
    }

    /// プロセス共有のレジストリ
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// 拡張子（大文字小文字を区別しない、先頭の `.` なし）から検索する
    pub fn lookup(&self, extension: &str) -> Option<&FormatEntry> {
        self.entries.get(&extension.to_ascii_lowercase())
    }

    /// 登録済みの拡張子一覧（ソート済み）
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
