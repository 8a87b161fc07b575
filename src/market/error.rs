use thiserror::Error;

/// Failures at the quote-backend boundary.
#[derive(Debug, Error)]
pub enum MarketError {
    /// The backend answered with `result: "ERROR"`.
    #[error("backend error {status_code}: {message}")]
    Api { status_code: u16, message: String },
    #[error("failed to decode backend payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// Transport or other failure inside a `CandleSource` implementation.
    #[error("candle source {source_name} failed: {reason}")]
    Source {
        source_name: &'static str,
        reason: String,
    },
}
