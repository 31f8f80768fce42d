//! Shared utility functions.

use chrono::{DateTime, Utc};

/// Formats an epoch-millisecond timestamp for display.
///
/// Out-of-range values are rendered as the raw number.
pub fn format_timestamp_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis).map_or_else(
        || millis.to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

/// Smallest and largest non-null timestamp, if any.
pub fn time_span(time: &[Option<i64>]) -> Option<(i64, i64)> {
    time.iter().flatten().fold(None, |span, &t| match span {
        None => Some((t, t)),
        Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_millis() {
        assert_eq!(format_timestamp_millis(1_704_110_400_000), "2024-01-01 12:00:00 UTC");
        assert_eq!(format_timestamp_millis(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_time_span_skips_nulls() {
        assert_eq!(time_span(&[]), None);
        assert_eq!(time_span(&[None, None]), None);
        assert_eq!(time_span(&[Some(300), None, Some(100), Some(200)]), Some((100, 300)));
    }
}
