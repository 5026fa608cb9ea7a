//! Data module - CSV loading, column validation and OHLC extraction

mod columns;
mod loader;
mod processor;

pub use columns::{
    OhlcColumns, DEFAULT_CLOSE_COL, DEFAULT_HIGH_COL, DEFAULT_LOW_COL, DEFAULT_OPEN_COL,
    DEFAULT_TIMESTAMP_COL,
};
pub use loader::{column_names, DataLoader, LoaderError};
pub use processor::{DataProcessor, OhlcRows, ProcessorError};
