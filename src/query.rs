//! Request parameter helpers shared by both domains: path ids, the listing
//! window, range filters and query flags.

use std::ops::Range;

use serde::{de, Deserialize, Deserializer};

use crate::error::{ShopError, ShopResult};

/// Page size used when a listing request omits `limit`.
pub const DEFAULT_LIMIT: usize = 10;

pub(crate) fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Id range `[offset, offset + limit)` clamped to the `len` ids allocated so far.
///
/// Registries never remove entries, so an entity's id is also its insertion
/// index and this range is exactly the slice of the registry in insertion order.
pub fn window(offset: usize, limit: usize, len: usize) -> Range<usize> {
    let start = offset.min(len);
    let end = offset.saturating_add(limit).min(len);
    start..end
}

/// True when `value` lies inside the optional inclusive bounds.
pub fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

pub(crate) fn ensure_positive_limit(limit: usize) -> ShopResult<()> {
    if limit == 0 {
        return Err(ShopError::Unprocessable(
            "Query parameter 'limit' must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(name: &str, value: Option<f64>) -> ShopResult<()> {
    match value {
        // Also rejects NaN.
        Some(v) if !(v >= 0.0) => Err(ShopError::Unprocessable(format!(
            "Query parameter '{}' must be greater than or equal to 0",
            name
        ))),
        _ => Ok(()),
    }
}

/// Parses a path id.
///
/// Anything that is not an integer is refused with 422. An integer that no
/// registry can hold (negative, or past `usize::MAX`) is `None`, which the
/// handler reports as an unknown id.
pub fn parse_id(name: &str, raw: &str) -> ShopResult<Option<usize>> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShopError::Unprocessable(format!(
            "Path parameter '{}' must be an integer",
            name
        )));
    }
    Ok(raw.parse::<usize>().ok())
}

/// Query flag accepting `1/0`, `true/false`, `t/f`, `yes/no`, `y/n` and
/// `on/off` in any case.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        _ => Err(de::Error::custom(format!(
            "invalid boolean value '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps_to_len() {
        assert_eq!(window(0, 10, 15), 0..10);
        assert_eq!(window(10, 10, 15), 10..15);
        assert_eq!(window(20, 10, 15), 15..15);
        assert_eq!(window(usize::MAX, 10, 3), 3..3);
    }

    #[test]
    fn test_within_bounds() {
        assert!(within(5.0, None, None));
        assert!(within(5.0, Some(5.0), Some(5.0)));
        assert!(!within(4.9, Some(5.0), None));
        assert!(!within(7_u64, None, Some(6)));
    }

    #[test]
    fn test_validation() {
        assert!(ensure_positive_limit(1).is_ok());
        assert!(ensure_positive_limit(0).is_err());
        assert!(ensure_non_negative("min_price", None).is_ok());
        assert!(ensure_non_negative("min_price", Some(0.0)).is_ok());
        assert!(ensure_non_negative("min_price", Some(-1.0)).is_err());
        assert!(ensure_non_negative("max_price", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("id", "0"), Ok(Some(0)));
        assert_eq!(parse_id("id", "+12"), Ok(Some(12)));
        assert_eq!(parse_id("id", "-1"), Ok(None));
        assert_eq!(parse_id("id", "99999999999999999999999"), Ok(None));
        assert!(parse_id("id", "abc").is_err());
        assert!(parse_id("id", "-").is_err());
        assert!(parse_id("id", "1.5").is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
    }

    fn flag(query: &str) -> Option<bool> {
        axum::extract::Query::<Flags>::try_from_uri(&format!("/x?{}", query).parse().unwrap())
            .ok()
            .map(|q| q.0.flag)
    }

    #[test]
    fn test_lenient_bool() {
        assert_eq!(flag(""), Some(false));
        assert_eq!(flag("flag=1"), Some(true));
        assert_eq!(flag("flag=True"), Some(true));
        assert_eq!(flag("flag=YES"), Some(true));
        assert_eq!(flag("flag=on"), Some(true));
        assert_eq!(flag("flag=0"), Some(false));
        assert_eq!(flag("flag=Off"), Some(false));
        assert_eq!(flag("flag=maybe"), None);
    }
}
