//! Technical-indicator core for a stock chart client.
//!
//! `indicators` holds the pure computations (moving average, Bollinger Bands,
//! RSI). `chart` batches them into the overlay set the candlestick chart
//! draws, and `market` describes the backend the candles come from.

pub mod chart;
pub mod config;
pub mod indicators;
pub mod market;

pub use chart::{load_overlays, CandlestickPoint, ChartOverlays, VisibleRange};
pub use config::{ConfigError, OverlayConfig};
pub use indicators::candle::Candle;
pub use indicators::momentum::rsi;
pub use indicators::moving_averages::moving_average;
pub use indicators::series::{IndicatorPoint, SortedCandles};
pub use indicators::volatility::{bollinger_bands, BollingerBands};
pub use market::{CandleSource, ChartPeriod, MarketError};
