//! Indicator output points and the sorted candle view the indicators share.

use serde::Serialize;

use crate::indicators::candle::Candle;

/// One computed value aligned to a candle.
///
/// `time` is in seconds since epoch, the resolution the chart widget expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}

impl IndicatorPoint {
    /// Creates a point aligned to `candle`, downscaling its time to seconds.
    pub fn at(candle: &Candle, value: f64) -> Self {
        Self {
            time: candle.time_secs(),
            value,
        }
    }
}

/// Ascending-by-time view over a caller's candles.
///
/// Holds references only, so the caller's slice is never reordered and can be
/// reused for further indicator calls. Build it once to share a single sort
/// across several indicators.
#[derive(Debug, Clone)]
pub struct SortedCandles<'a> {
    candles: Vec<&'a Candle>,
}

impl<'a> SortedCandles<'a> {
    pub fn new(candles: &'a [Candle]) -> Self {
        let mut sorted: Vec<&Candle> = candles.iter().collect();
        // stable: equal times keep input order
        sorted.sort_by_key(|c| c.get_time());
        Self { candles: sorted }
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a Candle] {
        &self.candles
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Candle> + '_ {
        self.candles.iter().copied()
    }

    /// Closing prices in ascending time order.
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.get_close()).collect()
    }
}
