//! Wire types for the block-index subgraph.

use crate::shared::serde_util::u64_from_str_or_num;
use serde::{Deserialize, Serialize};

/// One `blocks(...)` result row. Only the number is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    #[serde(deserialize_with = "u64_from_str_or_num::deserialize")]
    pub number: u64,
}
