//! Simple Moving Average (SMA) over closing prices

use crate::indicators::candle::Candle;
use crate::indicators::series::{IndicatorPoint, SortedCandles};

/// Chart defaults for the four moving-average overlays.
pub const DEFAULT_MA_PERIODS: [usize; 4] = [5, 20, 60, 200];

/// Calculates the Simple Moving Average (SMA) series over a slice of candles.
///
/// SMA = (C1 + C2 + ... + Cn) / n
///
/// Candles are sorted by time first, so input order does not matter.
/// Each point is aligned to the last candle of its window, giving
/// `candles.len() - period + 1` points. Returns an empty vector if there are
/// not enough candles or `period` is zero.
pub fn moving_average(candles: &[Candle], period: usize) -> Vec<IndicatorPoint> {
    moving_average_sorted(&SortedCandles::new(candles), period)
}

/// Same as [`moving_average`] over an already sorted view.
pub fn moving_average_sorted(sorted: &SortedCandles<'_>, period: usize) -> Vec<IndicatorPoint> {
    let candles = sorted.as_slice();
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(candles.len() - period + 1);

    for i in (period - 1)..candles.len() {
        let start = i + 1 - period;
        let sum: f64 = candles[start..=i].iter().map(|c| c.get_close()).sum();
        points.push(IndicatorPoint::at(candles[i], sum / period as f64));
    }

    points
}
