//! Response envelope of the quote backend.
//!
//! Every REST call answers with the same wrapper:
//! `{ "result": "SUCCESS" | "ERROR", "statusCode": 200, "message": "...", "data": ... }`.

use serde::{Deserialize, Serialize};

use crate::indicators::candle::Candle;
use crate::market::error::MarketError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub result: ResultStatus,
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    // ERROR envelopes usually carry `null` here
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.result == ResultStatus::Success
    }

    /// Unwraps the payload, turning an ERROR envelope into [`MarketError::Api`].
    ///
    /// A SUCCESS envelope without data is also reported as an API error.
    pub fn into_data(self) -> Result<T, MarketError> {
        if !self.is_success() {
            return Err(MarketError::Api {
                status_code: self.status_code,
                message: self.message,
            });
        }
        self.data.ok_or_else(|| MarketError::Api {
            status_code: self.status_code,
            message: "response carried no data".to_string(),
        })
    }
}

/// Readiness of the backend's candle cache for one symbol.
///
/// Candles for a freshly added symbol are collected asynchronously on the
/// server, the client polls this until `ready` flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleStatus {
    pub symbol: String,
    pub ready: bool,
    pub state: String,
    #[serde(default)]
    pub message: String,
}

/// Decodes a candle list response body.
pub fn decode_candles(body: &str) -> Result<Vec<Candle>, MarketError> {
    let response: ApiResponse<Vec<Candle>> = serde_json::from_str(body)?;
    response.into_data()
}

/// Decodes a candle status response body.
pub fn decode_candle_status(body: &str) -> Result<CandleStatus, MarketError> {
    let response: ApiResponse<CandleStatus> = serde_json::from_str(body)?;
    response.into_data()
}
