use chrono::{DateTime, Utc};

use crate::errors::ReceiptPayloadError;

/// A point in time as reported by the verifyReceipt API and version 1 server
/// notifications, which always send the same instant in three parallel string
/// forms:
///
/// - `date`: `2013-08-01 07:00:00 Etc/GMT`
/// - `date_ms`: `1375340400000`
/// - `date_pst`: `2013-08-01 00:00:00 America/Los_Angeles`
///
/// The three forms are kept verbatim. They are not checked against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleDate {
    pub date: String,
    pub date_ms: String,
    pub date_pst: String,
}

impl AppleDate {
    /// Parses the millisecond form into a UTC timestamp.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, ReceiptPayloadError> {
        let millis = self.date_ms.trim().parse::<i64>().map_err(|e| {
            ReceiptPayloadError::malformed_with_debug(
                "AppleDate::to_utc",
                "millisecond timestamp is not an integer",
                &e,
            )
        })?;
        DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            ReceiptPayloadError::malformed("AppleDate::to_utc", "timestamp out of range")
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date(ms: &str) -> AppleDate {
        AppleDate {
            date: "2013-08-01 07:00:00 Etc/GMT".to_string(),
            date_ms: ms.to_string(),
            date_pst: "2013-08-01 00:00:00 America/Los_Angeles".to_string(),
        }
    }

    #[test]
    fn to_utc_uses_millisecond_form() {
        let parsed = date("1375340400000").to_utc().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2013, 8, 1, 7, 0, 0).unwrap());
    }

    #[test]
    fn to_utc_rejects_non_numeric_millis() {
        let err = date("yesterday").to_utc().unwrap_err();
        assert!(err.is_malformed());
    }
}
