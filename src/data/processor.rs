//! Data Processor Module
//! Pulls the aligned OHLC sequences out of a loaded DataFrame.

use crate::data::OhlcColumns;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// OHLC values in file row order. All five vectors have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcRows {
    pub timestamps: Vec<String>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
}

/// Handles column extraction and type coercion.
pub struct DataProcessor;

impl DataProcessor {
    /// Extract the five OHLC columns, one entry per row, without reordering.
    ///
    /// Price cells that cannot be read as numbers come back as `None`.
    pub fn extract_ohlc(
        df: &DataFrame,
        columns: &OhlcColumns,
    ) -> Result<OhlcRows, ProcessorError> {
        Ok(OhlcRows {
            timestamps: Self::labels(df, &columns.timestamp)?,
            open: Self::prices(df, &columns.open)?,
            high: Self::prices(df, &columns.high)?,
            low: Self::prices(df, &columns.low)?,
            close: Self::prices(df, &columns.close)?,
        })
    }

    /// Column rendered as category labels. Nulls become empty labels.
    fn labels(df: &DataFrame, name: &str) -> Result<Vec<String>, ProcessorError> {
        let labels = df.column(name)?.cast(&DataType::String)?;
        let labels = labels.str()?;

        Ok(labels
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect())
    }

    fn prices(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ProcessorError> {
        let values = df.column(name)?.cast(&DataType::Float64)?;
        let values = values.f64()?;

        Ok(values.into_iter().collect())
    }
}
