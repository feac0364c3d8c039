//! Alias-keyed `pair` payloads → sorted `PriceSample`s.

use super::wire::PairRates;
use super::PriceSample;
use crate::query::alias;
use crate::shared::Resolved;
use serde_json::{Map, Value};

/// Decode a merged batch into price samples sorted by timestamp.
///
/// Keys are skipped when the alias is foreign or the pair is `null` (not
/// indexed, or not yet deployed at that block). Batch keys come back in
/// string order (`t10` before `t9`), so samples are re-sorted numerically.
pub(crate) fn samples_from_entries(entries: Map<String, Value>) -> Resolved<PriceSample> {
    let mut resolved = Resolved::default();
    for (key, value) in entries {
        let sample = alias::decode(&key).and_then(|timestamp| {
            if !value.is_object() {
                return None;
            }
            let rates: PairRates = serde_json::from_value(value).ok()?;
            Some(PriceSample {
                timestamp,
                rate0: rates.token0_price,
                rate1: rates.token1_price,
            })
        });
        match sample {
            Some(sample) => resolved.items.push(sample),
            None => resolved.skipped.push(key),
        }
    }
    resolved.items.sort_by_key(|s| s.timestamp);
    resolved
}
