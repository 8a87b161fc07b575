//! Momentum indicators: Relative Strength Index (RSI)

use crate::indicators::candle::Candle;
use crate::indicators::series::{IndicatorPoint, SortedCandles};

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculates the Wilder-smoothed RSI series over a slice of candles.
///
/// RSI = 100 - (100 / (1 + RS))
/// where RS = Average Gain / Average Loss
///
/// The averages are seeded with the simple mean of the first `period` price
/// changes, then smoothed: avg = (avg * (period - 1) + current) / period.
///
/// The first point sits on candle `period` (the later candle of the last
/// seed change), so the series has `candles.len() - period` points.
/// Returns an empty vector unless there are more than `period` candles.
pub fn rsi(candles: &[Candle], period: usize) -> Vec<IndicatorPoint> {
    rsi_sorted(&SortedCandles::new(candles), period)
}

/// Same as [`rsi`] over an already sorted view.
pub fn rsi_sorted(sorted: &SortedCandles<'_>, period: usize) -> Vec<IndicatorPoint> {
    let candles = sorted.as_slice();

    // Need period + 1 candles to get `period` price changes
    if period == 0 || candles.len() <= period {
        return Vec::new();
    }

    let changes = price_changes(&sorted.closes());
    let (gains, losses) = gains_and_losses(&changes);

    let mut points = Vec::with_capacity(candles.len() - period);

    let mut avg_gain: f64 = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[..period].iter().sum::<f64>() / period as f64;
    points.push(IndicatorPoint::at(candles[period], rsi_value(avg_gain, avg_loss)));

    let smoothing = (period - 1) as f64;
    for i in period..changes.len() {
        avg_gain = (avg_gain * smoothing + gains[i]) / period as f64;
        avg_loss = (avg_loss * smoothing + losses[i]) / period as f64;

        // change i is close[i + 1] - close[i]
        points.push(IndicatorPoint::at(candles[i + 1], rsi_value(avg_gain, avg_loss)));
    }

    points
}

/// RSI from smoothed averages.
///
/// A flat window (no gains, no losses) is neutral 50 rather than undefined.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain == 0.0 && avg_loss == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// Calculates price changes between consecutive closes.
///
/// Returns a vector of changes where each value is: current_close - previous_close
fn price_changes(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Separates price changes into gains and losses.
///
/// Returns a tuple of (gains, losses) where:
/// - gains[i] = change if positive, else 0
/// - losses[i] = |change| if negative, else 0
///
/// A NaN change stays NaN on both sides (`f64::max` would drop it).
fn gains_and_losses(changes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let gains = changes.iter().map(|&c| if c < 0.0 { 0.0 } else { c }).collect();
    let losses = changes.iter().map(|&c| if c > 0.0 { 0.0 } else { -c }).collect();
    (gains, losses)
}
