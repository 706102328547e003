//! Tolerant decoding of numeric annotation fields.
//!
//! The service may send numbers as JSON numbers or as strings. Values that
//! cannot be read as a number decode as absent instead of failing the whole
//! response.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl NumberRepr {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Whole seconds. Strings keep their integer prefix (`"12s"` is 12).
pub(crate) fn seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = match Option::<NumberRepr>::deserialize(deserializer)? {
        Some(NumberRepr::Int(value)) => value,
        Some(NumberRepr::Text(text)) => parse_leading_int(&text),
        Some(other) => other.as_f64().map_or(0, |v| v.trunc() as i64),
        None => 0,
    };
    Ok(seconds)
}

/// Nanosecond component; 0 when unusable or outside the `i32` range.
pub(crate) fn nanos<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let nanos = Option::<NumberRepr>::deserialize(deserializer)?
        .and_then(|repr| repr.as_f64())
        .map(f64::trunc)
        .filter(|v| (i32::MIN as f64..=i32::MAX as f64).contains(v))
        .map_or(0, |v| v as i32);
    Ok(nanos)
}

/// Normalized box edge; `None` when absent or unusable.
pub(crate) fn edge<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let edge = Option::<NumberRepr>::deserialize(deserializer)?
        .and_then(|repr| repr.as_f64())
        .map(|v| v as f32);
    Ok(edge)
}

/// Integer prefix of `text` after leading whitespace, 0 if there is none.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative { -value } else { value }
}
