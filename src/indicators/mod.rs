//! Technical indicators for chart overlays

pub mod candle;
pub mod momentum;
pub mod moving_averages;
pub mod series;
pub mod volatility;
