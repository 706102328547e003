//! Sample timestamps and the decimal quantization used to match them
//! against playback time.

use serde::{Deserialize, Serialize};

use crate::annotation::lenient;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Finest quantization supported; one step is a nanosecond.
pub(crate) const MAX_DECIMAL_PLACES: u32 = 9;

/// Offset of a sample from the start of the video.
///
/// Both components are accepted as JSON numbers or strings (the int64 JSON
/// mapping used by the annotation service sends `seconds` as a string).
/// Missing, null or unparseable components default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffset {
    #[serde(default, deserialize_with = "lenient::seconds")]
    pub seconds: i64,
    #[serde(default, deserialize_with = "lenient::nanos")]
    pub nanos: i32,
}

impl TimeOffset {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Offset as fractional seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.nanos as f64 / NANOS_PER_SEC as f64
    }

    /// Quantization bucket of this offset at `decimal_places` precision.
    ///
    /// Computed from the integer components so that a sample sitting exactly
    /// on a half step rounds up.
    pub(crate) fn bucket(&self, decimal_places: u32) -> i64 {
        let places = decimal_places.min(MAX_DECIMAL_PLACES);
        let step = 10_i128.pow(MAX_DECIMAL_PLACES - places);
        let total = self.seconds as i128 * NANOS_PER_SEC + self.nanos as i128;
        (total + step / 2).div_euclid(step) as i64
    }
}

/// Quantization bucket of a playback time, or `None` when the time is not a
/// finite number.
pub(crate) fn time_bucket(time: f64, decimal_places: u32) -> Option<i64> {
    if !time.is_finite() {
        return None;
    }
    let scale = 10_f64.powi(decimal_places.min(MAX_DECIMAL_PLACES) as i32);
    Some((time * scale).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> TimeOffset {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_seconds_from_string_or_number() {
        let offset = decode(r#"{"seconds": "12", "nanos": 5}"#);
        assert_eq!(offset, TimeOffset::new(12, 5));
        assert_eq!(decode(r#"{"seconds": 3}"#), TimeOffset::new(3, 0));
        assert_eq!(decode(r#"{"seconds": "7s"}"#).seconds, 7);
    }

    #[test]
    fn test_nanos_from_string_or_float() {
        let half = TimeOffset::new(0, 500_000_000);
        assert_eq!(decode(r#"{"nanos": "500000000"}"#), half);
        assert_eq!(decode(r#"{"nanos": 5e8}"#), half);

        let offset = decode(r#"{"seconds": "1", "nanos": "x"}"#);
        assert_eq!(offset, TimeOffset::new(1, 0));
    }

    #[test]
    fn test_missing_components_default_to_zero() {
        let offset = decode(r#"{"nanos": 500000000}"#);
        assert_eq!(offset.seconds, 0);
        assert!((offset.as_secs_f64() - 0.5).abs() < 1e-12);

        let offset = decode(r#"{"seconds": null, "nanos": null}"#);
        assert_eq!(offset, TimeOffset::default());
        assert_eq!(decode(r#"{"seconds": "abc"}"#).seconds, 0);
    }

    #[test]
    fn test_bucket_rounds_to_tenths() {
        assert_eq!(TimeOffset::new(1, 240_000_000).bucket(1), 12);
        assert_eq!(TimeOffset::new(1, 250_000_000).bucket(1), 13);
        assert_eq!(TimeOffset::new(0, 949_999_999).bucket(1), 9);
        assert_eq!(TimeOffset::new(0, 950_000_000).bucket(1), 10);
        assert_eq!(TimeOffset::new(2, 0).bucket(0), 2);
    }

    #[test]
    fn test_time_bucket() {
        assert_eq!(time_bucket(0.5, 1), Some(5));
        assert_eq!(time_bucket(0.54, 1), Some(5));
        assert_eq!(time_bucket(0.56, 1), Some(6));
        assert_eq!(time_bucket(12.31, 2), Some(1231));
        assert_eq!(time_bucket(f64::NAN, 1), None);
        assert_eq!(time_bucket(f64::INFINITY, 1), None);
    }
}
