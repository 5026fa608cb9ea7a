//! Static Chart Plotter
//! Draws a chart description to a PNG image with plotters.
//!
//! The static image has no interactive parts, so the range slider flag is
//! ignored. Candles with any missing price are skipped.

use crate::charts::description::{CandlestickSeries, ChartDescription, CHART_MARGIN};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use thiserror::Error;

const BACKGROUND: RGBColor = WHITE;
const GAIN: RGBColor = RGBColor(46, 204, 113); // Green
const LOSS: RGBColor = RGBColor(231, 76, 60); // Red

/// Widest a candle body may get, in pixels.
const MAX_CANDLE_WIDTH: u32 = 15;
/// Maximum number of x-axis labels before they start to overlap.
const MAX_X_LABELS: usize = 10;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Invalid image size {0}x{1}")]
    InvalidSize(u32, u32),
}

pub struct ChartPlotter;

impl ChartPlotter {
    /// Render the description to PNG bytes.
    ///
    /// An empty description produces a blank canvas of the requested size.
    pub fn render_png(
        chart: &ChartDescription,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, PlotError> {
        if width == 0 || height == 0 {
            return Err(PlotError::InvalidSize(width, height));
        }

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
                .into_drawing_area();
            root.fill(&BACKGROUND)
                .map_err(|e| PlotError::Drawing(e.to_string()))?;

            if !chart.is_empty() {
                Self::draw_candles(&root, &chart.data[0])?;
            }

            root.present()
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }

        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(PlotError::InvalidSize(width, height))?;
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png)?;
        Ok(png.into_inner())
    }

    fn draw_candles(
        root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
        series: &CandlestickSeries,
    ) -> Result<(), PlotError> {
        let n = series.len();
        let (y_min, y_max) = Self::price_range(series);

        let mut chart = ChartBuilder::on(root)
            .margin(CHART_MARGIN)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), y_min..y_max)
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        // X positions are row indices; labels map back to the timestamps.
        let label_for = |x: &f64| -> String {
            let idx = x.round();
            if idx < 0.0 || (idx - x).abs() > f64::EPSILON {
                return String::new();
            }
            series.x.get(idx as usize).cloned().unwrap_or_default()
        };

        chart
            .configure_mesh()
            .x_labels(n.min(MAX_X_LABELS))
            .x_label_formatter(&label_for)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        let plot_width = root.dim_in_pixel().0.saturating_sub(60 + 2 * CHART_MARGIN);
        let candle_width = (plot_width / n.max(1) as u32)
            .saturating_sub(2)
            .clamp(1, MAX_CANDLE_WIDTH);

        let candles = (0..n).filter_map(|i| {
            let open = series.open[i]?;
            let high = series.high[i]?;
            let low = series.low[i]?;
            let close = series.close[i]?;
            Some(CandleStick::new(
                i as f64,
                open,
                high,
                low,
                close,
                GAIN.filled(),
                LOSS.filled(),
                candle_width,
            ))
        });

        chart
            .draw_series(candles)
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    }

    /// Y bounds covering every low and high, padded by 5%.
    fn price_range(series: &CandlestickSeries) -> (f64, f64) {
        let prices = series
            .low
            .iter()
            .chain(series.high.iter())
            .flatten()
            .copied()
            .filter(|v| v.is_finite());

        let (min, max) = prices.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if min > max {
            return (0.0, 1.0);
        }

        let pad = ((max - min) * 0.05).max(max.abs() * 1e-3).max(1e-9);
        (min - pad, max + pad)
    }
}
