use crate::errors::MediaError;

/// `<識別子>.<拡張子>` 形式のファイル名を分解する
///
/// 大文字小文字は区別しない（どちらも小文字化して返す）。
/// `.` で区切った結果が空でない2要素にならない場合はエラー。
pub fn parse_filename(filename: &str) -> Result<(String, String), MediaError> {
    let lowered = filename.to_lowercase();
    let parts: Vec<&str> = lowered.split('.').collect();

    let [id, extension] = parts.as_slice() else {
        return Err(MediaError::validation(format!(
            "Invalid filename: {filename}"
        )));
    };

    // 識別子に使える文字のみ（英数字、ハイフン、アンダースコア）
    if id.is_empty()
        || extension.is_empty()
        || !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MediaError::validation(format!(
            "Invalid filename: {filename}"
        )));
    }

    Ok((id.to_string(), extension.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filenames() {
        let (id, ext) = parse_filename("2f1c0e5a-7b9d-4c3e-8f6a-1d2b3c4d5e6f.jpg").unwrap();
        assert_eq!(id, "2f1c0e5a-7b9d-4c3e-8f6a-1d2b3c4d5e6f");
        assert_eq!(ext, "jpg");
    }

    #[test]
    fn test_filename_is_lowercased() {
        let (id, ext) = parse_filename("ABC-123.PNG").unwrap();
        assert_eq!(id, "abc-123");
        assert_eq!(ext, "png");
    }

    #[test]
    fn test_wrong_number_of_parts() {
        assert!(parse_filename("noextension").is_err());
        assert!(parse_filename("a.b.jpg").is_err());
        assert!(parse_filename("").is_err());
    }

    #[test]
    fn test_empty_parts_rejected() {
        for name in [".jpg", "abc.", "."] {
            match parse_filename(name) {
                Err(MediaError::Validation(msg)) => {
                    assert_eq!(msg, format!("Invalid filename: {name}"))
                }
                other => panic!("expected validation error for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_path_characters_rejected() {
        assert!(parse_filename("../etc.jpg").is_err());
        assert!(parse_filename("a/b.jpg").is_err());
        assert!(parse_filename("a\\b.jpg").is_err());
    }
}
