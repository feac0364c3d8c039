//! Block domain: resolving time buckets to block numbers.

pub mod client;
mod convert;
pub mod query;
pub mod wire;

use serde::{Deserialize, Serialize};

pub(crate) use convert::blocks_from_entries;

/// A time bucket resolved to the latest block mined shortly after it.
///
/// `timestamp` is the bucket, not the block's own timestamp: it is what keys
/// the price query and ends up on the chart's time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRef {
    pub timestamp: i64,
    pub number: u64,
}
