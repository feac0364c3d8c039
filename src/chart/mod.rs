//! Chart adapter: feeds pipeline output into a charting widget.
//!
//! The widget itself lives outside this crate behind [`ChartBackend`].
//! [`TradingChart`] owns the one chart it creates and the series currently
//! attached to it, replacing the series on every render.

pub mod options;

pub use options::{default_options, merge_options, CandleStyle};

use crate::client::PairChartClient;
use crate::domain::bucket::Span;
use crate::domain::price::Series;
use crate::shared::{PairAddress, SeriesKind};
use crate::transport::GraphTransport;
use serde_json::Value;

/// A charting widget able to host one chart with swappable series.
pub trait ChartBackend {
    /// Handle to a created chart.
    type Chart;
    /// Handle to a series attached to a chart.
    type Series;

    fn create_chart(&mut self, container: &str, options: &Value) -> Self::Chart;

    /// `style` only applies to candlestick series.
    fn add_series(
        &mut self,
        chart: &mut Self::Chart,
        kind: SeriesKind,
        style: &CandleStyle,
    ) -> Self::Series;

    fn remove_series(&mut self, chart: &mut Self::Chart, series: Self::Series);

    fn set_data(&mut self, series: &mut Self::Series, data: &Series);
}

/// Persistent chart wrapper: one chart, one live series at a time.
///
/// `create_chart` takes `&mut self`, so a wrapper never has two renders in
/// flight.
pub struct TradingChart<B: ChartBackend, T> {
    client: PairChartClient<T>,
    backend: B,
    candle_style: CandleStyle,
    last_chart: Option<B::Chart>,
    last_series: Option<B::Series>,
}

impl<B: ChartBackend, T: GraphTransport> TradingChart<B, T> {
    pub fn new(client: PairChartClient<T>, backend: B) -> Self {
        Self {
            client,
            backend,
            candle_style: CandleStyle::default(),
            last_chart: None,
            last_series: None,
        }
    }

    pub fn with_candle_style(mut self, style: CandleStyle) -> Self {
        self.candle_style = style;
        self
    }

    pub fn client(&self) -> &PairChartClient<T> {
        &self.client
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn has_chart(&self) -> bool {
        self.last_chart.is_some()
    }

    /// Fetch the pair's price history for `span` and show it as `kind`.
    ///
    /// Never fails: an unknown span, a malformed address or a pipeline error
    /// is logged and rendered as an empty series.
    pub async fn create_chart(
        &mut self,
        container: &str,
        options: &Value,
        pair_address: &str,
        span: &str,
        kind: SeriesKind,
    ) {
        let data = self.load(pair_address, span, kind).await;
        self.render(container, options, &data);
    }

    /// Run the pipeline, degrading every failure to an empty series.
    pub async fn load(&self, pair_address: &str, span: &str, kind: SeriesKind) -> Series {
        let Some(span) = Span::from_label(span) else {
            tracing::warn!(label = span, "Unknown chart span");
            return Series::empty(kind);
        };
        let pair = match PairAddress::parse(pair_address) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid pair address");
                return Series::empty(kind);
            }
        };

        match self.client.fetch_series(&pair, span, kind).await {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!(pair = %pair, span = %span, error = %e, "Price history unavailable");
                Series::empty(kind)
            }
        }
    }

    /// Replace whatever series is showing with `data`.
    ///
    /// The first call creates the chart from the default options merged with
    /// `options`; later calls reuse it and ignore `container`/`options`.
    pub fn render(&mut self, container: &str, options: &Value, data: &Series) {
        let backend = &mut self.backend;
        let chart = self.last_chart.get_or_insert_with(|| {
            backend.create_chart(container, &merge_options(default_options(), options))
        });
        if let Some(previous) = self.last_series.take() {
            backend.remove_series(chart, previous);
        }

        let mut series = backend.add_series(chart, data.kind(), &self.candle_style);
        backend.set_data(&mut series, data);
        self.last_series = Some(series);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::domain::price::LinePoint;
    use crate::error::HttpError;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    /// Records every backend call; series handles are sequence numbers.
    #[derive(Default)]
    struct RecordingBackend {
        charts_created: usize,
        options: Vec<Value>,
        next_series: u32,
        attached: Vec<u32>,
        removed: Vec<u32>,
        data: Vec<(u32, Series)>,
    }

    impl ChartBackend for RecordingBackend {
        type Chart = ();
        type Series = u32;

        fn create_chart(&mut self, _container: &str, options: &Value) {
            self.charts_created += 1;
            self.options.push(options.clone());
        }

        fn add_series(&mut self, _chart: &mut (), _kind: SeriesKind, _style: &CandleStyle) -> u32 {
            self.next_series += 1;
            self.attached.push(self.next_series);
            self.next_series
        }

        fn remove_series(&mut self, _chart: &mut (), series: u32) {
            self.attached.retain(|s| *s != series);
            self.removed.push(series);
        }

        fn set_data(&mut self, series: &mut u32, data: &Series) {
            self.data.push((*series, data.clone()));
        }
    }

    fn failing_chart() -> TradingChart<RecordingBackend, MockTransport> {
        let client = PairChartClient::with_transport(
            MockTransport::new(|_, _| Err(HttpError::Timeout)),
            ChartConfig::default(),
        );
        TradingChart::new(client, RecordingBackend::default())
    }

    fn line(points: &[(i64, f64)]) -> Series {
        Series::Line(points.iter().map(|&(time, value)| LinePoint { time, value }).collect())
    }

    #[test]
    fn test_first_render_creates_chart_with_merged_options() {
        let mut chart = failing_chart();
        chart.render("chart", &json!({ "width": 800 }), &line(&[(1, 1.0)]));
        let backend = chart.backend();
        assert_eq!(backend.charts_created, 1);
        assert_eq!(backend.options[0]["width"], json!(800));
        assert_eq!(backend.options[0]["timeScale"]["timeVisible"], json!(true));
        assert_eq!(backend.attached, vec![1]);
    }

    #[test]
    fn test_rerender_reuses_chart_and_replaces_series() {
        let mut chart = failing_chart();
        chart.render("chart", &Value::Null, &line(&[(1, 1.0)]));
        chart.render("chart", &Value::Null, &Series::empty(SeriesKind::Candle));
        chart.render("chart", &Value::Null, &line(&[(2, 2.0)]));
        let backend = chart.backend();
        assert_eq!(backend.charts_created, 1);
        assert_eq!(backend.removed, vec![1, 2]);
        assert_eq!(backend.attached, vec![3]);
        assert_eq!(backend.data.last(), Some(&(3, line(&[(2, 2.0)]))));
    }

    #[test]
    fn test_pipeline_error_renders_empty_series() {
        let mut chart = failing_chart();
        tokio_test::block_on(chart.create_chart(
            "chart",
            &Value::Null,
            "0xb4e16d0168e52d35cacd2c6185b44281ec28c9dc",
            "1d",
            SeriesKind::Candle,
        ));
        assert!(chart.has_chart());
        assert_eq!(chart.backend().data, vec![(1, Series::empty(SeriesKind::Candle))]);
    }

    #[test]
    fn test_unknown_span_renders_empty_without_requests() {
        let mut chart = failing_chart();
        tokio_test::block_on(chart.create_chart(
            "chart",
            &Value::Null,
            "0xb4e16d0168e52d35cacd2c6185b44281ec28c9dc",
            "ALL",
            SeriesKind::Line,
        ));
        assert_eq!(chart.client().transport().call_count(), 0);
        assert_eq!(chart.backend().data, vec![(1, Series::empty(SeriesKind::Line))]);
    }

    #[test]
    fn test_invalid_pair_renders_empty_without_requests() {
        let mut chart = failing_chart();
        tokio_test::block_on(chart.create_chart(
            "chart",
            &Value::Null,
            "not-a-pair",
            "1w",
            SeriesKind::Line,
        ));
        assert_eq!(chart.client().transport().call_count(), 0);
        assert!(chart.backend().data[0].1.is_empty());
    }
}
