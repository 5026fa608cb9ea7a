//! Command line configuration.

use crate::data::OhlcColumns;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8050;

/// Serve an interactive candlestick chart of an OHLC CSV file.
#[derive(Parser, Debug, Clone)]
#[command(name = "chartify_candles", version, about)]
pub struct Cli {
    /// Path to the CSV file with timestamp/open/high/low/close columns.
    ///
    /// Optional at parse time so a missing path gets the plain usage message.
    #[arg(value_name = "CSV_PATH")]
    pub csv_path: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "CHARTIFY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, short, env = "CHARTIFY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Open the chart page in the default browser after startup.
    #[arg(long)]
    pub open: bool,

    /// Column holding the candle timestamp (x-axis label).
    #[arg(long, default_value = crate::data::DEFAULT_TIMESTAMP_COL)]
    pub timestamp_col: String,

    /// Column holding the open price.
    #[arg(long, default_value = crate::data::DEFAULT_OPEN_COL)]
    pub open_col: String,

    /// Column holding the high price.
    #[arg(long, default_value = crate::data::DEFAULT_HIGH_COL)]
    pub high_col: String,

    /// Column holding the low price.
    #[arg(long, default_value = crate::data::DEFAULT_LOW_COL)]
    pub low_col: String,

    /// Column holding the close price.
    #[arg(long, default_value = crate::data::DEFAULT_CLOSE_COL)]
    pub close_col: String,
}

impl Cli {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn columns(&self) -> OhlcColumns {
        OhlcColumns {
            timestamp: self.timestamp_col.clone(),
            open: self.open_col.clone(),
            high: self.high_col.clone(),
            low: self.low_col.clone(),
            close: self.close_col.clone(),
        }
    }
}
