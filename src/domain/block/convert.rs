//! Alias-keyed `blocks` payloads → `BlockRef`s.

use super::wire::BlockEntry;
use super::BlockRef;
use crate::query::alias;
use crate::shared::Resolved;
use serde_json::{Map, Value};

/// Decode a merged batch into block refs, in batch key order.
///
/// A key is skipped when its alias is foreign, its payload is malformed, or
/// no block was mined in its window (empty array).
pub(crate) fn blocks_from_entries(entries: Map<String, Value>) -> Resolved<BlockRef> {
    let mut resolved = Resolved::default();
    for (key, value) in entries {
        let block = alias::decode(&key).and_then(|timestamp| {
            serde_json::from_value::<Vec<BlockEntry>>(value)
                .ok()?
                .into_iter()
                .next()
                .map(|entry| BlockRef {
                    timestamp,
                    number: entry.number,
                })
        });
        match block {
            Some(block) => resolved.items.push(block),
            None => resolved.skipped.push(key),
        }
    }
    resolved
}
