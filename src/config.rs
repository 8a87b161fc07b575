//! Overlay configuration for the candlestick chart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::momentum::DEFAULT_RSI_PERIOD;
use crate::indicators::moving_averages::DEFAULT_MA_PERIODS;
use crate::indicators::volatility::{DEFAULT_BOLLINGER_PERIOD, DEFAULT_STD_DEV_MULTIPLIER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be at least 1")]
    ZeroPeriod(&'static str),
    #[error("bb_std_dev must be a positive finite number, got {0}")]
    InvalidMultiplier(f64),
    #[error("failed to parse overlay config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which overlays the chart draws and with which parameters.
///
/// Missing fields fall back to the chart defaults: MA 5/20/60/200,
/// Bollinger 20 x 2σ, RSI 14, everything shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub show_ma5: bool,
    pub show_ma20: bool,
    pub show_ma60: bool,
    pub show_ma200: bool,
    pub show_bollinger_bands: bool,
    pub show_rsi: bool,
    pub ma5_period: usize,
    pub ma20_period: usize,
    pub ma60_period: usize,
    pub ma200_period: usize,
    pub bb_period: usize,
    pub bb_std_dev: f64,
    pub rsi_period: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        let [ma5, ma20, ma60, ma200] = DEFAULT_MA_PERIODS;
        Self {
            show_ma5: true,
            show_ma20: true,
            show_ma60: true,
            show_ma200: true,
            show_bollinger_bands: true,
            show_rsi: true,
            ma5_period: ma5,
            ma20_period: ma20,
            ma60_period: ma60,
            ma200_period: ma200,
            bb_period: DEFAULT_BOLLINGER_PERIOD,
            bb_std_dev: DEFAULT_STD_DEV_MULTIPLIER,
            rsi_period: DEFAULT_RSI_PERIOD,
        }
    }
}

impl OverlayConfig {
    /// Parses and validates a JSON config. Absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: OverlayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("ma5_period", self.ma5_period),
            ("ma20_period", self.ma20_period),
            ("ma60_period", self.ma60_period),
            ("ma200_period", self.ma200_period),
            ("bb_period", self.bb_period),
            ("rsi_period", self.rsi_period),
        ];
        if let Some((name, _)) = periods.into_iter().find(|(_, p)| *p == 0) {
            return Err(ConfigError::ZeroPeriod(name));
        }
        if !(self.bb_std_dev.is_finite() && self.bb_std_dev > 0.0) {
            return Err(ConfigError::InvalidMultiplier(self.bb_std_dev));
        }
        Ok(())
    }

    /// Enabled moving averages as (label, period) pairs.
    pub fn moving_averages(&self) -> Vec<(&'static str, usize)> {
        [
            (self.show_ma5, "MA5", self.ma5_period),
            (self.show_ma20, "MA20", self.ma20_period),
            (self.show_ma60, "MA60", self.ma60_period),
            (self.show_ma200, "MA200", self.ma200_period),
        ]
        .into_iter()
        .filter(|(show, _, _)| *show)
        .map(|(_, label, period)| (label, period))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_chart() {
        let config = OverlayConfig::default();
        assert_eq!(config.ma200_period, 200);
        assert_eq!(config.bb_period, 20);
        assert_eq!(config.bb_std_dev, 2.0);
        assert_eq!(config.rsi_period, 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = OverlayConfig::from_json(r#"{"bb_std_dev": 2.5, "show_ma200": false}"#).unwrap();
        assert_eq!(config.bb_std_dev, 2.5);
        assert!(!config.show_ma200);
        assert_eq!(config.ma60_period, 60);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = OverlayConfig::from_json(r#"{"rsi_period": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPeriod("rsi_period")));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let config = OverlayConfig {
            bb_std_dev: -1.0,
            ..OverlayConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMultiplier(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(OverlayConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_moving_averages_respects_flags() {
        let config = OverlayConfig {
            show_ma20: false,
            ..OverlayConfig::default()
        };
        assert_eq!(config.moving_averages(), vec![("MA5", 5), ("MA60", 60), ("MA200", 200)]);
    }
}
