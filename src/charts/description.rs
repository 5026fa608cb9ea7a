//! Chart description types.
//!
//! A renderer-agnostic figure: one candlestick series plus layout options.
//! Field names follow plotly.js' figure schema so the browser page can hand
//! the JSON straight to `Plotly.react`.

use crate::data::OhlcRows;
use serde::Serialize;

/// Chart height in pixels.
pub const CHART_HEIGHT: u32 = 600;
/// Margin applied to all four sides, in pixels.
pub const CHART_MARGIN: u32 = 50;

/// Complete figure. `ChartDescription::default()` is the empty chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartDescription {
    pub data: Vec<CandlestickSeries>,
    pub layout: Layout,
}

impl ChartDescription {
    /// Number of candles in the chart.
    pub fn len(&self) -> usize {
        self.data.first().map(CandlestickSeries::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the range slider should be shown. False for the empty chart.
    pub fn rangeslider_visible(&self) -> bool {
        self.layout
            .xaxis
            .as_ref()
            .map(|axis| axis.rangeslider.visible)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Candlestick,
}

/// Candlestick trace. `x` and the four price vectors are aligned by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlestickSeries {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub x: Vec<String>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
}

impl CandlestickSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }
}

impl From<OhlcRows> for CandlestickSeries {
    fn from(rows: OhlcRows) -> Self {
        Self {
            kind: SeriesKind::Candlestick,
            x: rows.timestamps,
            open: rows.open,
            high: rows.high,
            low: rows.low,
            close: rows.close,
        }
    }
}

/// Layout options. Every field is optional so the empty chart serializes
/// as `{}` and leaves the renderer on its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<XAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<YAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// Categorical x-axis whose category order is pinned to the data's row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub rangeslider: RangeSlider,
    pub categoryorder: CategoryOrder,
    pub categoryarray: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryOrder {
    /// Use `categoryarray` as given.
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YAxis {
    pub autorange: bool,
    pub fixedrange: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            l: px,
            r: px,
            t: px,
            b: px,
        }
    }
}
