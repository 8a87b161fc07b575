//! Boundary to the quote backend: response envelope, candle decoding and the
//! candle source abstraction.

pub mod api_response;
pub mod candle_source;
pub mod chart_period;
pub mod error;

// Re-exports for convenience
pub use api_response::{
    decode_candle_status,
    decode_candles,
    ApiResponse,
    CandleStatus,
    ResultStatus,
};
pub use candle_source::CandleSource;
pub use error::MarketError;
pub use chart_period::{ChartPeriod, UnknownChartPeriod};
