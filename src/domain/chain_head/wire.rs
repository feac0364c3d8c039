//! Wire types for the index-node status endpoint.

use crate::shared::serde_util::u64_from_str_or_num;
use serde::Deserialize;

/// `data` of the indexing-status query.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexingStatusResponse {
    #[serde(rename = "indexingStatusForCurrentVersion", default)]
    pub status: Option<IndexingStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingStatus {
    #[serde(default)]
    pub synced: bool,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub chains: Vec<ChainIndexingStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainIndexingStatus {
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub chain_head_block: Option<BlockNumber>,
    #[serde(default)]
    pub latest_block: Option<BlockNumber>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BlockNumber {
    #[serde(deserialize_with = "u64_from_str_or_num::deserialize")]
    pub number: u64,
}

impl IndexingStatus {
    pub fn is_healthy(&self) -> bool {
        self.health.as_deref() == Some("healthy")
    }

    /// Latest block the subgraph has indexed on `network`.
    ///
    /// Falls back to the first reported chain when none matches by name.
    pub fn latest_block(&self, network: &str) -> Option<u64> {
        self.chains
            .iter()
            .find(|c| c.network.as_deref() == Some(network))
            .or_else(|| self.chains.first())
            .and_then(|c| c.latest_block)
            .map(|b| b.number)
    }
}
