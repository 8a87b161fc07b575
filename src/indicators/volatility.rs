//! Volatility indicators: Bollinger Bands

use serde::Serialize;

use crate::indicators::candle::Candle;
use crate::indicators::series::{IndicatorPoint, SortedCandles};

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_STD_DEV_MULTIPLIER: f64 = 2.0;

/// Upper, middle and lower bands, index- and time-aligned with each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BollingerBands {
    pub upper: Vec<IndicatorPoint>,
    pub middle: Vec<IndicatorPoint>,
    pub lower: Vec<IndicatorPoint>,
}

impl BollingerBands {
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Calculates Bollinger Bands over a slice of candles.
///
/// - `middle` = SMA of the window's closes
/// - `upper`  = middle + `std_dev_multiplier` * σ
/// - `lower`  = middle - `std_dev_multiplier` * σ
///
/// σ is the population standard deviation of the same window around that
/// window's own mean. All three series have `candles.len() - period + 1`
/// points, or none if there are not enough candles.
pub fn bollinger_bands(candles: &[Candle], period: usize, std_dev_multiplier: f64) -> BollingerBands {
    bollinger_bands_sorted(&SortedCandles::new(candles), period, std_dev_multiplier)
}

/// Same as [`bollinger_bands`] over an already sorted view.
pub fn bollinger_bands_sorted(
    sorted: &SortedCandles<'_>,
    period: usize,
    std_dev_multiplier: f64,
) -> BollingerBands {
    let candles = sorted.as_slice();
    if period == 0 || candles.len() < period {
        return BollingerBands::default();
    }

    let len = candles.len() - period + 1;
    let mut bands = BollingerBands {
        upper: Vec::with_capacity(len),
        middle: Vec::with_capacity(len),
        lower: Vec::with_capacity(len),
    };

    for i in (period - 1)..candles.len() {
        let window = &candles[i + 1 - period..=i];
        let (mean, std_dev) = mean_and_std_dev(window.iter().map(|c| c.get_close()), period);
        let width = std_dev_multiplier * std_dev;

        bands.middle.push(IndicatorPoint::at(candles[i], mean));
        bands.upper.push(IndicatorPoint::at(candles[i], mean + width));
        bands.lower.push(IndicatorPoint::at(candles[i], mean - width));
    }

    bands
}

/// Mean and population standard deviation of one window.
fn mean_and_std_dev(closes: impl Iterator<Item = f64> + Clone, period: usize) -> (f64, f64) {
    let n = period as f64;
    let mean = closes.clone().sum::<f64>() / n;
    let variance = closes.map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle::new(i as i64 * 60_000, close, close, close, close, 500, "USD"))
            .collect()
    }

    #[test]
    fn test_bollinger_known_window() {
        let candles = candles_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let bands = bollinger_bands(&candles, 3, 1.0);

        assert_eq!(bands.len(), 3);
        // mean 20, σ = sqrt(200/3) ≈ 8.165
        assert!((bands.middle[0].value - 20.0).abs() < 1e-9);
        assert!((bands.upper[0].value - 28.164_965_809_277_26).abs() < 1e-9);
        assert!((bands.lower[0].value - 11.835_034_190_722_74).abs() < 1e-9);
    }

    #[test]
    fn test_bollinger_symmetry() {
        let candles = candles_from_closes(&[101.5, 99.2, 103.7, 98.1, 104.4, 100.0, 97.3, 105.9, 102.2]);
        let bands = bollinger_bands(&candles, 4, 2.0);

        for i in 0..bands.len() {
            let up = bands.upper[i].value - bands.middle[i].value;
            let down = bands.middle[i].value - bands.lower[i].value;
            assert!((up - down).abs() < 1e-9, "asymmetric at {}: {} vs {}", i, up, down);
        }
    }

    #[test]
    fn test_bollinger_series_aligned() {
        let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let bands = bollinger_bands(&candles, 2, 2.0);

        assert_eq!(bands.upper.len(), 5);
        assert_eq!(bands.lower.len(), 5);
        for i in 0..bands.len() {
            assert_eq!(bands.upper[i].time, bands.middle[i].time);
            assert_eq!(bands.lower[i].time, bands.middle[i].time);
        }
    }

    #[test]
    fn test_bollinger_flat_prices_collapse() {
        let candles = candles_from_closes(&[100.0; 20]);
        let bands = bollinger_bands(&candles, 20, 2.0);

        assert_eq!(bands.len(), 1);
        assert_eq!(bands.upper[0].value, 100.0);
        assert_eq!(bands.lower[0].value, 100.0);
    }

    #[test]
    fn test_bollinger_insufficient_data() {
        let candles = candles_from_closes(&[1.0, 2.0, 3.0]);
        let bands = bollinger_bands(&candles, DEFAULT_BOLLINGER_PERIOD, DEFAULT_STD_DEV_MULTIPLIER);
        assert!(bands.upper.is_empty());
        assert!(bands.middle.is_empty());
        assert!(bands.lower.is_empty());
    }

    #[test]
    fn test_bollinger_middle_matches_sma() {
        let candles = candles_from_closes(&[5.0, 7.0, 6.0, 9.0, 8.0, 11.0, 10.0]);
        let bands = bollinger_bands(&candles, 3, 2.0);
        let sma = crate::indicators::moving_averages::moving_average(&candles, 3);
        assert_eq!(bands.middle, sma);
    }
}
