//! Series derivation: line points or synthetic candles from sorted samples.

use super::{Candle, LinePoint, PriceSample};
use crate::shared::SeriesKind;
use serde::Serialize;

/// Chart-ready price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Line(Vec<LinePoint>),
    Candle(Vec<Candle>),
}

impl Series {
    pub fn empty(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Line => Series::Line(Vec::new()),
            SeriesKind::Candle => Series::Candle(Vec::new()),
        }
    }

    /// Derive a series from samples sorted by timestamp.
    ///
    /// Each point consumes two adjacent samples, so `N` samples give `N - 1`
    /// points in both shapes; the line drops the final sample to keep the
    /// same length as the candle view.
    pub fn derive(samples: &[PriceSample], kind: SeriesKind) -> Self {
        let pairs = samples.windows(2);
        match kind {
            SeriesKind::Line => Series::Line(pairs.map(|w| LinePoint::from(&w[0])).collect()),
            SeriesKind::Candle => {
                Series::Candle(pairs.map(|w| Candle::between(&w[0], &w[1])).collect())
            }
        }
    }

    pub fn kind(&self) -> SeriesKind {
        match self {
            Series::Line(_) => SeriesKind::Line,
            Series::Candle(_) => SeriesKind::Candle,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Line(points) => points.len(),
            Series::Candle(candles) => candles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Timestamps of every point, in order.
    pub fn times(&self) -> Vec<i64> {
        match self {
            Series::Line(points) => points.iter().map(|p| p.time).collect(),
            Series::Candle(candles) => candles.iter().map(|c| c.time).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: i64, rate0: f64) -> PriceSample {
        PriceSample {
            timestamp,
            rate0,
            rate1: 1.0 / rate0,
        }
    }

    fn samples(n: usize) -> Vec<PriceSample> {
        (0..n).map(|i| sample(1000 + i as i64 * 600, 1.0 + i as f64)).collect()
    }

    #[test]
    fn test_length_is_n_minus_one() {
        for n in 2..6 {
            assert_eq!(Series::derive(&samples(n), SeriesKind::Line).len(), n - 1);
            assert_eq!(Series::derive(&samples(n), SeriesKind::Candle).len(), n - 1);
        }
    }

    #[test]
    fn test_zero_or_one_sample_is_empty() {
        for n in 0..2 {
            assert!(Series::derive(&samples(n), SeriesKind::Line).is_empty());
            assert!(Series::derive(&samples(n), SeriesKind::Candle).is_empty());
        }
        assert_eq!(Series::derive(&[], SeriesKind::Candle), Series::empty(SeriesKind::Candle));
    }

    #[test]
    fn test_candle_from_two_samples() {
        let series = Series::derive(&[sample(100, 2.0), sample(700, 3.0)], SeriesKind::Candle);
        assert_eq!(
            series,
            Series::Candle(vec![Candle {
                time: 100,
                open: 2.0,
                low: 2.0,
                close: 3.0,
                high: 3.0,
            }])
        );
    }

    #[test]
    fn test_falling_candle_keeps_endpoint_rule() {
        let series = Series::derive(&[sample(100, 3.0), sample(700, 2.0)], SeriesKind::Candle);
        let Series::Candle(candles) = series else { panic!("expected candles") };
        assert_eq!(candles[0].low, 3.0);
        assert_eq!(candles[0].high, 2.0);
    }

    #[test]
    fn test_line_uses_rate0_and_drops_last_sample() {
        let samples = [sample(100, 2.0), sample(700, 3.0), sample(1300, 4.0)];
        let series = Series::derive(&samples, SeriesKind::Line);
        assert_eq!(
            series,
            Series::Line(vec![
                LinePoint { time: 100, value: 2.0 },
                LinePoint { time: 700, value: 3.0 },
            ])
        );
        assert_eq!(series.kind(), SeriesKind::Line);
        assert_eq!(series.times(), vec![100, 700]);
    }

    #[test]
    fn test_series_serializes_as_plain_array() {
        let series = Series::Line(vec![LinePoint { time: 100, value: 2.5 }]);
        assert_eq!(serde_json::to_string(&series).unwrap(), r#"[{"time":100,"value":2.5}]"#);
    }
}
