use crate::errors::TransformError;

fn parse_integer(name: &str, value: &str) -> Result<i64, TransformError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| TransformError::InvalidParams(format!("{name} must be an integer, got {value:?}")))
}

/// thumbnail の値を検証する（1 以上の整数）
pub fn parse_thumbnail_size(value: &str) -> Result<u32, TransformError> {
    let size = parse_integer("thumbnail", value)?;

    if size < 1 || size > u32::MAX as i64 {
        return Err(TransformError::InvalidParams(format!(
            "thumbnail must be a positive integer, got {size}"
        )));
    }

    Ok(size as u32)
}

/// rotate の値を検証する（整数の度数、0..360 に正規化）
pub fn parse_rotate_angle(value: &str) -> Result<i32, TransformError> {
    let angle = parse_integer("rotate", value)?;
    Ok(angle.rem_euclid(360) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_thumbnail() {
        assert_eq!(parse_thumbnail_size("50").unwrap(), 50);
        assert_eq!(parse_thumbnail_size(" 128 ").unwrap(), 128);
        assert_eq!(parse_thumbnail_size("+7").unwrap(), 7);
    }

    #[test]
    fn test_invalid_thumbnail() {
        assert!(parse_thumbnail_size("0").is_err());
        assert!(parse_thumbnail_size("-5").is_err());
        assert!(parse_thumbnail_size("abc").is_err());
        assert!(parse_thumbnail_size("").is_err());
        assert!(parse_thumbnail_size("99999999999").is_err());
    }

    #[test]
    fn test_rotate_normalized() {
        assert_eq!(parse_rotate_angle("90").unwrap(), 90);
        assert_eq!(parse_rotate_angle("-90").unwrap(), 270);
        assert_eq!(parse_rotate_angle("720").unwrap(), 0);
    }

    #[test]
    fn test_invalid_rotate() {
        assert!(parse_rotate_angle("left").is_err());
        assert!(parse_rotate_angle("45.0").is_err());
    }
}
