//! Wire types for the DEX subgraph's `pair` entity.

use crate::shared::serde_util::{lenient_f64, nan};
use serde::Deserialize;

/// Relative prices of a pair at one block. Missing or unparseable prices
/// read as `NaN`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRates {
    #[serde(default = "nan", deserialize_with = "lenient_f64::deserialize")]
    pub token0_price: f64,
    #[serde(default = "nan", deserialize_with = "lenient_f64::deserialize")]
    pub token1_price: f64,
}
