//! HTTP handlers.
//!
//! Each request maps to exactly one `ChartRenderer::render` call. Rendering
//! reads the CSV synchronously, so it runs on tokio's blocking pool.

use crate::charts::{ChartDescription, ChartPlotter, ChartRenderer, RenderOptions, CHART_HEIGHT};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

const INDEX_HTML: &str = include_str!("index.html");

const DEFAULT_PNG_WIDTH: u32 = 1000;
const MIN_PNG_WIDTH: u32 = 100;
const MAX_PNG_WIDTH: u32 = 4000;

/// Query string of the chart endpoints. The checkbox starts checked, so the
/// range slider defaults to visible.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartQuery {
    #[serde(default = "default_rangeslider")]
    pub rangeslider: bool,
    #[serde(default = "default_png_width")]
    pub width: u32,
}

fn default_rangeslider() -> bool {
    true
}

fn default_png_width() -> u32 {
    DEFAULT_PNG_WIDTH
}

impl ChartQuery {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            show_range_slider: self.rangeslider,
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /api/chart` - the chart description as JSON.
pub async fn chart(
    State(renderer): State<Arc<ChartRenderer>>,
    Query(query): Query<ChartQuery>,
) -> Json<ChartDescription> {
    let options = query.options();
    info!(rangeslider = options.show_range_slider, "Chart requested");

    let chart = tokio::task::spawn_blocking(move || renderer.render(options))
        .await
        .unwrap_or_else(|e| {
            error!("Render task failed: {e}");
            ChartDescription::default()
        });

    Json(chart)
}

/// `GET /api/chart.png` - static snapshot of the same chart.
pub async fn chart_png(
    State(renderer): State<Arc<ChartRenderer>>,
    Query(query): Query<ChartQuery>,
) -> Response {
    let options = query.options();
    let width = query.width.clamp(MIN_PNG_WIDTH, MAX_PNG_WIDTH);

    let result = tokio::task::spawn_blocking(move || {
        let chart = renderer.render(options);
        ChartPlotter::render_png(&chart, width, CHART_HEIGHT)
    })
    .await;

    match result {
        Ok(Ok(png)) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Ok(Err(e)) => {
            error!("{e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(e) => {
            error!("Snapshot task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OhlcColumns;
    use crate::test_support::write_csv;
    use axum::http::Uri;

    const CSV: &str = "timestamp,open_price_token_usd,high_price_token_usd,low_price_token_usd,close_price_token_usd\n\
                       t1,10,12,9,11\n\
                       t2,11,13,10,12\n";

    fn state(name: &str) -> State<Arc<ChartRenderer>> {
        let path = write_csv(name, CSV);
        State(Arc::new(ChartRenderer::new(path, OhlcColumns::default())))
    }

    fn query(uri: &str) -> Query<ChartQuery> {
        Query::try_from_uri(&uri.parse::<Uri>().unwrap()).unwrap()
    }

    #[test]
    fn rangeslider_defaults_to_visible() {
        let Query(q) = query("http://localhost/api/chart");
        assert!(q.rangeslider);
        assert_eq!(q.width, DEFAULT_PNG_WIDTH);

        let Query(q) = query("http://localhost/api/chart?rangeslider=false&width=640");
        assert!(!q.rangeslider);
        assert_eq!(q.width, 640);
    }

    #[tokio::test]
    async fn chart_endpoint_follows_toggle() {
        let Json(on) = chart(
            state("routes_on"),
            query("http://localhost/api/chart?rangeslider=true"),
        )
        .await;
        assert_eq!(on.len(), 2);
        assert!(on.rangeslider_visible());

        let Json(off) = chart(
            state("routes_off"),
            query("http://localhost/api/chart?rangeslider=false"),
        )
        .await;
        assert_eq!(off.len(), 2);
        assert!(!off.rangeslider_visible());
    }

    #[tokio::test]
    async fn chart_endpoint_returns_empty_chart_for_missing_file() {
        let state = State(Arc::new(ChartRenderer::new(
            "/missing/prices.csv",
            OhlcColumns::default(),
        )));

        let Json(desc) = chart(state, query("http://localhost/api/chart")).await;
        assert_eq!(desc, ChartDescription::default());
    }

    #[tokio::test]
    async fn png_endpoint_serves_image_for_empty_chart() {
        let state = State(Arc::new(ChartRenderer::new(
            "/missing/prices.csv",
            OhlcColumns::default(),
        )));

        let response = chart_png(state, query("http://localhost/api/chart.png?width=300")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[1..4], b"PNG");
    }

    #[tokio::test]
    async fn index_page_has_toggle_and_chart() {
        let Html(page) = index().await;
        assert!(page.contains("Include Rangeslider"));
        assert!(page.contains("id=\"graph\""));
        assert!(page.contains("/api/chart?rangeslider="));
    }
}
