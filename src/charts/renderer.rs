//! Candlestick Chart Renderer
//! Turns the CSV file into a chart description, once per UI interaction.
//!
//! Pipeline:
//! 1. Load the CSV (fresh read every call, nothing cached)
//! 2. Check the five OHLC columns are present
//! 3. Build the candlestick series in row order
//! 4. Apply the fixed layout plus the range slider toggle
//!
//! Any failure along the way is logged and turned into an empty chart, so
//! the page always gets a well-formed description back.

use crate::charts::description::{
    CandlestickSeries, CategoryOrder, ChartDescription, Layout, Margin, RangeSlider, XAxis,
    YAxis, CHART_HEIGHT, CHART_MARGIN,
};
use crate::data::{
    column_names, DataLoader, DataProcessor, LoaderError, OhlcColumns, ProcessorError,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Error reading or processing CSV file: {0}")]
    Load(#[from] LoaderError),
    #[error(
        "CSV file is missing required columns: {}; available columns: {}",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },
    #[error("Error extracting OHLC columns: {0}")]
    Extract(#[from] ProcessorError),
}

/// Per-call render options, driven by the UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_range_slider: bool,
}

/// Builds candlestick chart descriptions from a fixed CSV path.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    loader: DataLoader,
    columns: OhlcColumns,
}

impl ChartRenderer {
    pub fn new(csv_path: impl Into<PathBuf>, columns: OhlcColumns) -> Self {
        Self {
            loader: DataLoader::new(csv_path),
            columns,
        }
    }

    pub fn csv_path(&self) -> &Path {
        self.loader.file_path()
    }

    pub fn columns(&self) -> &OhlcColumns {
        &self.columns
    }

    /// Render the chart. Never fails: errors are logged and produce the
    /// empty description.
    pub fn render(&self, options: RenderOptions) -> ChartDescription {
        match self.try_render(options) {
            Ok(chart) => {
                debug!(
                    candles = chart.len(),
                    rangeslider = options.show_range_slider,
                    "Rendered candlestick chart"
                );
                chart
            }
            Err(e) => {
                error!(path = %self.csv_path().display(), "{e}");
                ChartDescription::default()
            }
        }
    }

    /// Load, validate and build, reporting the first failure.
    pub fn try_render(&self, options: RenderOptions) -> Result<ChartDescription, ChartError> {
        let df = self.loader.load_csv()?;

        let available = column_names(&df);
        let missing = self.columns.missing(&available);
        if !missing.is_empty() {
            return Err(ChartError::MissingColumns { missing, available });
        }

        let rows = DataProcessor::extract_ohlc(&df, &self.columns)?;
        let categories = rows.timestamps.clone();

        Ok(ChartDescription {
            data: vec![CandlestickSeries::from(rows)],
            layout: Self::layout(categories, options),
        })
    }

    fn layout(categories: Vec<String>, options: RenderOptions) -> Layout {
        Layout {
            xaxis: Some(XAxis {
                rangeslider: RangeSlider {
                    visible: options.show_range_slider,
                },
                // Keeps the renderer from re-sorting or gap-filling dates.
                categoryorder: CategoryOrder::Array,
                categoryarray: categories,
            }),
            yaxis: Some(YAxis {
                autorange: true,
                fixedrange: false,
            }),
            height: Some(CHART_HEIGHT),
            margin: Some(Margin::uniform(CHART_MARGIN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_csv;

    const HEADER: &str = "timestamp,open_price_token_usd,high_price_token_usd,low_price_token_usd,close_price_token_usd";

    fn renderer(path: &Path) -> ChartRenderer {
        ChartRenderer::new(path, OhlcColumns::default())
    }

    fn opts(show_range_slider: bool) -> RenderOptions {
        RenderOptions { show_range_slider }
    }

    #[test]
    fn renders_two_row_scenario() {
        let path = write_csv(
            "render_scenario",
            &format!("{HEADER}\nt1,10,12,9,11\nt2,11,13,10,12\n"),
        );

        let chart = renderer(&path).render(opts(true));

        assert_eq!(chart.len(), 2);
        let series = &chart.data[0];
        assert_eq!(series.x, vec!["t1", "t2"]);
        assert_eq!(series.open, vec![Some(10.0), Some(11.0)]);
        assert_eq!(series.high, vec![Some(12.0), Some(13.0)]);
        assert_eq!(series.low, vec![Some(9.0), Some(10.0)]);
        assert_eq!(series.close, vec![Some(11.0), Some(12.0)]);
        assert!(chart.rangeslider_visible());
    }

    #[test]
    fn layout_is_fixed_apart_from_the_toggle() {
        let path = write_csv("render_layout", &format!("{HEADER}\nt1,10,12,9,11\n"));
        let renderer = renderer(&path);

        for flag in [true, false] {
            let chart = renderer.render(opts(flag));
            assert_eq!(chart.len(), 1);
            assert_eq!(chart.rangeslider_visible(), flag);
            assert_eq!(chart.layout.height, Some(600));
            assert_eq!(chart.layout.margin, Some(Margin::uniform(50)));
            assert_eq!(
                chart.layout.yaxis,
                Some(YAxis {
                    autorange: true,
                    fixedrange: false
                })
            );
            let xaxis = chart.layout.xaxis.as_ref().unwrap();
            assert_eq!(xaxis.categoryorder, CategoryOrder::Array);
        }
    }

    #[test]
    fn category_order_follows_rows_not_dates() {
        let path = write_csv(
            "render_order",
            &format!(
                "{HEADER}\n2024-03-01,1,2,0.5,1.5\n2023-12-31,1,2,0.5,1.5\n2024-01-15,1,2,0.5,1.5\n"
            ),
        );

        let chart = renderer(&path).render(opts(false));

        let expected = vec!["2024-03-01", "2023-12-31", "2024-01-15"];
        assert_eq!(chart.data[0].x, expected);
        assert_eq!(chart.layout.xaxis.unwrap().categoryarray, expected);
    }

    #[test]
    fn header_only_gives_zero_length_series() {
        let path = write_csv("render_header_only", &format!("{HEADER}\n"));
        let renderer = renderer(&path);

        for flag in [true, false] {
            let chart = renderer.render(opts(flag));
            assert_eq!(chart.data.len(), 1);
            assert_eq!(chart.len(), 0);
            assert_eq!(chart.rangeslider_visible(), flag);
            assert_ne!(chart, ChartDescription::default());
        }
    }

    #[test]
    fn extra_columns_are_ignored() {
        let path = write_csv(
            "render_extra",
            &format!("volume,{HEADER},pair\n100,t1,10,12,9,11,ETH/USDC\n"),
        );

        let chart = renderer(&path).render(opts(true));
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.data[0].close, vec![Some(11.0)]);
    }

    #[test]
    fn missing_column_gives_empty_chart_for_both_toggles() {
        let path = write_csv(
            "render_missing",
            "timestamp,open_price_token_usd,high_price_token_usd,low_price_token_usd\nt1,10,12,9\n",
        );
        let renderer = renderer(&path);

        assert_eq!(renderer.render(opts(true)), ChartDescription::default());
        assert_eq!(renderer.render(opts(false)), ChartDescription::default());
    }

    #[test]
    fn missing_column_diagnostic_lists_missing_and_available() {
        let path = write_csv(
            "render_missing_diag",
            "timestamp,open_price_token_usd,high_price_token_usd,low_price_token_usd\nt1,10,12,9\n",
        );

        let err = renderer(&path).try_render(opts(true)).unwrap_err();
        match err {
            ChartError::MissingColumns { missing, available } => {
                assert_eq!(missing, vec!["close_price_token_usd"]);
                assert_eq!(
                    available,
                    vec![
                        "timestamp",
                        "open_price_token_usd",
                        "high_price_token_usd",
                        "low_price_token_usd"
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_gives_empty_chart() {
        let renderer = renderer(Path::new("/no/such/dir/prices.csv"));

        assert_eq!(renderer.render(opts(true)), ChartDescription::default());
        assert!(matches!(
            renderer.try_render(opts(true)),
            Err(ChartError::Load(_))
        ));
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let path = write_csv(
            "render_idempotent",
            &format!("{HEADER}\nt1,10,12,9,11\nt2,11,13,10,12\nt3,12,14,11,13\n"),
        );
        let renderer = renderer(&path);

        assert_eq!(renderer.render(opts(true)), renderer.render(opts(true)));
        assert_eq!(renderer.render(opts(false)), renderer.render(opts(false)));
    }

    #[test]
    fn picks_up_file_changes_between_calls() {
        let path = write_csv("render_reload", &format!("{HEADER}\nt1,10,12,9,11\n"));
        let renderer = renderer(&path);
        assert_eq!(renderer.render(opts(true)).len(), 1);

        std::fs::write(&path, format!("{HEADER}\nt1,10,12,9,11\nt2,11,13,10,12\n")).unwrap();
        assert_eq!(renderer.render(opts(true)).len(), 2);
    }

    #[test]
    fn custom_column_mapping() {
        let path = write_csv(
            "render_custom_cols",
            "Date,Open,High,Low,Close\n2024-01-02,100.5,101,99,100\n",
        );
        let columns = OhlcColumns {
            timestamp: "Date".into(),
            open: "Open".into(),
            high: "High".into(),
            low: "Low".into(),
            close: "Close".into(),
        };

        let chart = ChartRenderer::new(&path, columns).render(opts(false));

        assert_eq!(chart.data[0].x, vec!["2024-01-02"]);
        assert_eq!(chart.data[0].open, vec![Some(100.5)]);
        assert!(!chart.rangeslider_visible());
    }
}
