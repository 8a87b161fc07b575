//! Overlay batch for the candlestick chart.
//!
//! Sorts the candles once and derives everything the chart draws from that
//! single view: the candlestick series itself, the moving averages, the
//! Bollinger Bands, RSI and the initially visible bar range.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::OverlayConfig;
use crate::indicators::candle::Candle;
use crate::indicators::momentum::rsi_sorted;
use crate::indicators::moving_averages::moving_average_sorted;
use crate::indicators::series::{IndicatorPoint, SortedCandles};
use crate::indicators::volatility::{bollinger_bands_sorted, BollingerBands};
use crate::market::{CandleSource, ChartPeriod, MarketError};

/// Number of most recent bars shown when the chart first renders.
pub const VISIBLE_BARS: usize = 50;

/// One candlestick as the chart widget takes it, time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandlestickPoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<&Candle> for CandlestickPoint {
    fn from(candle: &Candle) -> Self {
        Self {
            time: candle.time_secs(),
            open: candle.get_open(),
            high: candle.get_high(),
            low: candle.get_low(),
            close: candle.get_close(),
        }
    }
}

/// Logical bar index range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub from: usize,
    pub to: usize,
}

impl VisibleRange {
    /// Range covering the last `min(VISIBLE_BARS, len)` bars, `None` for no bars.
    pub fn latest(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let bars = VISIBLE_BARS.min(len);
        Some(Self {
            from: len - bars,
            to: len - 1,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAverageOverlay {
    pub label: &'static str,
    pub period: usize,
    pub points: Vec<IndicatorPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartOverlays {
    pub candles: Vec<CandlestickPoint>,
    pub visible_range: Option<VisibleRange>,
    pub moving_averages: Vec<MovingAverageOverlay>,
    pub bollinger: Option<BollingerBands>,
    pub rsi: Option<Vec<IndicatorPoint>>,
}

impl ChartOverlays {
    /// Computes every enabled overlay for `candles`.
    ///
    /// An overlay is left out when it is disabled, when there are fewer
    /// candles than its period, or when it would come out empty.
    pub fn compute(candles: &[Candle], config: &OverlayConfig) -> Self {
        let sorted = SortedCandles::new(candles);
        let count = sorted.len();

        let mut overlays = ChartOverlays {
            candles: sorted.iter().map(CandlestickPoint::from).collect(),
            visible_range: VisibleRange::latest(count),
            ..ChartOverlays::default()
        };

        if config.show_bollinger_bands && count >= config.bb_period {
            let bands = bollinger_bands_sorted(&sorted, config.bb_period, config.bb_std_dev);
            if !bands.is_empty() {
                debug!(
                    period = config.bb_period,
                    std_dev = config.bb_std_dev,
                    points = bands.len(),
                    "bollinger bands computed"
                );
                overlays.bollinger = Some(bands);
            }
        }

        for (label, period) in config.moving_averages() {
            if count < period {
                continue;
            }
            let points = moving_average_sorted(&sorted, period);
            if points.is_empty() {
                continue;
            }
            debug!(label, period, points = points.len(), "moving average computed");
            overlays.moving_averages.push(MovingAverageOverlay {
                label,
                period,
                points,
            });
        }

        if config.show_rsi && count > config.rsi_period {
            let points = rsi_sorted(&sorted, config.rsi_period);
            if !points.is_empty() {
                debug!(period = config.rsi_period, points = points.len(), "rsi computed");
                overlays.rsi = Some(points);
            }
        }

        overlays
    }

    pub fn moving_average(&self, label: &str) -> Option<&MovingAverageOverlay> {
        self.moving_averages.iter().find(|ma| ma.label == label)
    }
}

/// Fetches candles for `symbol` from `source` and computes the overlays.
pub async fn load_overlays<S: CandleSource>(
    source: &S,
    symbol: &str,
    period: ChartPeriod,
    config: &OverlayConfig,
) -> Result<ChartOverlays, MarketError> {
    let candles = source
        .fetch_candles(symbol, period)
        .await
        .inspect_err(|e| warn!(source = source.name(), symbol, %period, error = %e, "candle fetch failed"))?;

    debug!(source = source.name(), symbol, %period, candles = candles.len(), "candles fetched");

    Ok(ChartOverlays::compute(&candles, config))
}
