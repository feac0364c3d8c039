//! Chain-head domain: bounding block refs by what the indexer has processed.

pub mod client;
pub mod query;
pub mod wire;

use crate::domain::block::BlockRef;
use crate::query::alias;
use crate::shared::Resolved;

/// Drop every block beyond `latest`, preserving order.
///
/// With `latest == None` (head unknown) all blocks pass: the guard is
/// best-effort staleness protection and fails open.
pub fn retain_confirmed(blocks: Vec<BlockRef>, latest: Option<u64>) -> Resolved<BlockRef> {
    let Some(latest) = latest else {
        return Resolved::new(blocks, Vec::new());
    };

    let (items, stale): (Vec<_>, Vec<_>) = blocks.into_iter().partition(|b| b.number <= latest);
    Resolved::new(
        items,
        stale.iter().map(|b| alias::encode(b.timestamp)).collect(),
    )
}
