//! Candle interval requested from the quote backend.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Candle interval, serialized as the backend's `MIN1`..`MONTH1` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChartPeriod {
    Min1,   // 1 minute
    Min5,   // 5 minutes
    Min15,  // 15 minutes
    Min30,  // 30 minutes
    Min45,  // 45 minutes
    Hour1,  // 1 hour
    Hour2,  // 2 hours
    Hour4,  // 4 hours
    Day1,   // 1 day
    Week1,  // 1 week
    Month1, // 1 month, counted as 30 days
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 11] = [
        ChartPeriod::Min1,
        ChartPeriod::Min5,
        ChartPeriod::Min15,
        ChartPeriod::Min30,
        ChartPeriod::Min45,
        ChartPeriod::Hour1,
        ChartPeriod::Hour2,
        ChartPeriod::Hour4,
        ChartPeriod::Day1,
        ChartPeriod::Week1,
        ChartPeriod::Month1,
    ];

    /// Returns the nominal duration of one candle in seconds
    pub fn to_seconds(&self) -> u64 {
        match self {
            ChartPeriod::Min1 => 60,
            ChartPeriod::Min5 => 5 * 60,
            ChartPeriod::Min15 => 15 * 60,
            ChartPeriod::Min30 => 30 * 60,
            ChartPeriod::Min45 => 45 * 60,
            ChartPeriod::Hour1 => 60 * 60,
            ChartPeriod::Hour2 => 2 * 60 * 60,
            ChartPeriod::Hour4 => 4 * 60 * 60,
            ChartPeriod::Day1 => 24 * 60 * 60,
            ChartPeriod::Week1 => 7 * 24 * 60 * 60,
            ChartPeriod::Month1 => 30 * 24 * 60 * 60,
        }
    }

    /// Wire name used by the backend's query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::Min1 => "MIN1",
            ChartPeriod::Min5 => "MIN5",
            ChartPeriod::Min15 => "MIN15",
            ChartPeriod::Min30 => "MIN30",
            ChartPeriod::Min45 => "MIN45",
            ChartPeriod::Hour1 => "HOUR1",
            ChartPeriod::Hour2 => "HOUR2",
            ChartPeriod::Hour4 => "HOUR4",
            ChartPeriod::Day1 => "DAY1",
            ChartPeriod::Week1 => "WEEK1",
            ChartPeriod::Month1 => "MONTH1",
        }
    }
}

impl std::fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart period: {0}")]
pub struct UnknownChartPeriod(pub String);

impl FromStr for ChartPeriod {
    type Err = UnknownChartPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartPeriod::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChartPeriod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_display() {
        for period in ChartPeriod::ALL {
            assert_eq!(period.to_string().parse::<ChartPeriod>(), Ok(period));
        }
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&ChartPeriod::Hour4).unwrap(), "\"HOUR4\"");
        let parsed: ChartPeriod = serde_json::from_str("\"MONTH1\"").unwrap();
        assert_eq!(parsed, ChartPeriod::Month1);
    }

    #[test]
    fn test_durations() {
        assert_eq!(ChartPeriod::Min45.to_seconds(), 45 * 60);
        assert_eq!(ChartPeriod::Day1.to_seconds(), 86_400);
    }

    #[test]
    fn test_unknown_period() {
        assert!("DAY2".parse::<ChartPeriod>().is_err());
    }
}
