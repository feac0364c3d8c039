//! Price domain: pair price samples and the chart series derived from them.

pub mod client;
mod convert;
pub mod query;
pub mod series;
pub mod wire;

use serde::{Deserialize, Serialize};

pub(crate) use convert::samples_from_entries;
pub use series::Series;

/// Pair prices at one resolved block.
///
/// `rate0` is token0 priced in token1, `rate1` the inverse. Either is `NaN`
/// when the subgraph had no value at that block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp: i64,
    pub rate0: f64,
    pub rate1: f64,
}

/// A single point on a line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Unix timestamp in seconds.
    pub time: i64,
    pub value: f64,
}

/// A synthetic candle spanning two adjacent samples.
///
/// Only the endpoint prices are known, so `low == open` and `high == close`
/// regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix timestamp in seconds.
    pub time: i64,
    pub open: f64,
    pub low: f64,
    pub close: f64,
    pub high: f64,
}

impl Candle {
    pub fn between(from: &PriceSample, to: &PriceSample) -> Self {
        Self {
            time: from.timestamp,
            open: from.rate0,
            low: from.rate0,
            close: to.rate0,
            high: to.rate0,
        }
    }
}

impl From<&PriceSample> for LinePoint {
    fn from(s: &PriceSample) -> Self {
        Self {
            time: s.timestamp,
            value: s.rate0,
        }
    }
}
