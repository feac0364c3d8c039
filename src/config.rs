//! Pipeline configuration.
//!
//! Loading is left to the embedding application: the struct deserializes from
//! any serde format, and every field falls back to the `network` defaults.

use crate::batch::{DEFAULT_BLOCK_CHUNK_SIZE, DEFAULT_CHUNK_SIZE};
use crate::network::{
    DEFAULT_BLOCKS_URL, DEFAULT_DEX_URL, DEFAULT_INDEX_NODE_URL, DEFAULT_NETWORK,
    DEFAULT_SUBGRAPH_NAME,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// DEX subgraph serving `pair` entities.
    pub dex_url: String,
    /// Block-index subgraph.
    pub blocks_url: String,
    /// Index-node status endpoint.
    pub index_node_url: String,
    /// Subgraph whose indexing status bounds the usable blocks.
    pub subgraph_name: String,
    /// Network name as reported by the index node.
    pub network: String,
    pub block_chunk_size: usize,
    pub price_chunk_size: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dex_url: DEFAULT_DEX_URL.to_string(),
            blocks_url: DEFAULT_BLOCKS_URL.to_string(),
            index_node_url: DEFAULT_INDEX_NODE_URL.to_string(),
            subgraph_name: DEFAULT_SUBGRAPH_NAME.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            block_chunk_size: DEFAULT_BLOCK_CHUNK_SIZE,
            price_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
