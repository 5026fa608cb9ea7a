//! OHLC column roles.
//! Maps the five logical roles a candlestick needs onto concrete CSV headers.

pub const DEFAULT_TIMESTAMP_COL: &str = "timestamp";
pub const DEFAULT_OPEN_COL: &str = "open_price_token_usd";
pub const DEFAULT_HIGH_COL: &str = "high_price_token_usd";
pub const DEFAULT_LOW_COL: &str = "low_price_token_usd";
pub const DEFAULT_CLOSE_COL: &str = "close_price_token_usd";

/// Column names for the timestamp/open/high/low/close roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcColumns {
    pub timestamp: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
}

impl Default for OhlcColumns {
    fn default() -> Self {
        Self {
            timestamp: DEFAULT_TIMESTAMP_COL.to_string(),
            open: DEFAULT_OPEN_COL.to_string(),
            high: DEFAULT_HIGH_COL.to_string(),
            low: DEFAULT_LOW_COL.to_string(),
            close: DEFAULT_CLOSE_COL.to_string(),
        }
    }
}

impl OhlcColumns {
    /// Required column names in role order.
    pub fn required(&self) -> [&str; 5] {
        [
            self.timestamp.as_str(),
            self.open.as_str(),
            self.high.as_str(),
            self.low.as_str(),
            self.close.as_str(),
        ]
    }

    /// Required columns absent from `available`, in role order.
    pub fn missing(&self, available: &[String]) -> Vec<String> {
        self.required()
            .into_iter()
            .filter(|name| !available.iter().any(|col| col.as_str() == *name))
            .map(str::to_string)
            .collect()
    }
}
