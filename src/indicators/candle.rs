//! Candle (OHLCV) data structure with timestamp

use serde::{Deserialize, Serialize};

/// Represents a single candlestick with OHLCV data, timestamp and currency.
///
/// The timestamp is stored as Unix time in milliseconds, which is the format
/// the quote backend sends. Indicator output downscales it to seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Unix timestamp in milliseconds (candle open time)
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    currency: String,
    /// Display string from the backend, e.g. "2024-03-04 09:00:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    datetime: Option<String>,
}

impl Candle {
    /// Creates a new Candle.
    ///
    /// `time` should be Unix time in milliseconds (candle open time).
    pub fn new(
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
            currency: currency.into(),
            datetime: None,
        }
    }

    /// Returns the candle's timestamp (Unix time in milliseconds).
    pub fn get_time(&self) -> i64 {
        self.time
    }

    /// Returns the candle's timestamp floored to whole seconds.
    ///
    /// Floors toward negative infinity, so pre-epoch times stay monotonic.
    pub fn time_secs(&self) -> i64 {
        self.time.div_euclid(1000)
    }

    pub fn get_open(&self) -> f64 {
        self.open
    }

    pub fn get_high(&self) -> f64 {
        self.high
    }

    pub fn get_low(&self) -> f64 {
        self.low
    }

    pub fn get_close(&self) -> f64 {
        self.close
    }

    pub fn get_volume(&self) -> u64 {
        self.volume
    }

    pub fn get_currency(&self) -> &str {
        &self.currency
    }

    pub fn get_datetime(&self) -> Option<&str> {
        self.datetime.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_secs_floors() {
        let candle = Candle::new(1_700_000_000_999, 1.0, 1.0, 1.0, 1.0, 0, "USD");
        assert_eq!(candle.time_secs(), 1_700_000_000);
    }

    #[test]
    fn test_time_secs_negative_floors_down() {
        let candle = Candle::new(-1, 1.0, 1.0, 1.0, 1.0, 0, "USD");
        assert_eq!(candle.time_secs(), -1);
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{"datetime":"2024-03-04 09:00:00","time":1709510400000,"open":71000.0,"high":72100.0,"low":70800.0,"close":71900.0,"volume":1523400,"currency":"KRW"}"#;
        let candle: Candle = serde_json::from_str(json).unwrap();

        assert_eq!(candle.get_time(), 1_709_510_400_000);
        assert_eq!(candle.get_close(), 71900.0);
        assert_eq!(candle.get_volume(), 1_523_400);
        assert_eq!(candle.get_currency(), "KRW");
        assert_eq!(candle.get_datetime(), Some("2024-03-04 09:00:00"));
    }

    #[test]
    fn test_deserialize_without_datetime() {
        let json = r#"{"time":1000,"open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":10,"currency":"USD"}"#;
        let candle: Candle = serde_json::from_str(json).unwrap();
        assert!(candle.get_datetime().is_none());
    }
}
