//! Chain-head sub-client: latest indexed block for the DEX subgraph.

use super::query::indexing_status_query;
use super::wire::IndexingStatusResponse;
use crate::client::PairChartClient;
use crate::error::FetchError;
use crate::transport::{Endpoint, GraphTransport};
use serde_json::Value;

pub struct ChainHeadClient<'a, T> {
    pub(crate) client: &'a PairChartClient<T>,
}

impl<'a, T: GraphTransport> ChainHeadClient<'a, T> {
    /// Latest block the configured subgraph has indexed on the configured
    /// network, or `None` when the index node reports nothing usable.
    pub async fn latest_block(&self) -> Result<Option<u64>, FetchError> {
        let config = &self.client.config;
        let document = indexing_status_query(&config.subgraph_name);
        let data = self
            .client
            .transport
            .query(Endpoint::IndexNode, &document)
            .await?;

        let response: IndexingStatusResponse = match serde_json::from_value(Value::Object(data)) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable indexing status");
                return Ok(None);
            }
        };
        let Some(status) = response.status else {
            return Ok(None);
        };

        if !status.is_healthy() {
            tracing::warn!(
                subgraph = %config.subgraph_name,
                health = ?status.health,
                synced = status.synced,
                "Subgraph indexing is not healthy"
            );
        }
        Ok(status.latest_block(&config.network))
    }
}
