//! CandleSource trait for the upstream candle-fetching service.

use std::future::Future;

use crate::indicators::candle::Candle;
use crate::market::chart_period::ChartPeriod;
use crate::market::error::MarketError;

// The overlay code only needs "give me candles for this symbol and period".
// HTTP clients, caches and test fixtures implement this; nothing else in the
// crate knows how candles are fetched.

/// Supplier of candle series, typically the REST backend.
///
/// Implementations return candles as received. They need not be sorted, and
/// are assumed already validated (finite prices, non-negative volume).
pub trait CandleSource: Send + Sync {
    fn fetch_candles(
        &self,
        symbol: &str,
        period: ChartPeriod,
    ) -> impl Future<Output = Result<Vec<Candle>, MarketError>> + Send;

    fn name(&self) -> &'static str;
}
