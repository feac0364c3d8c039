//! Blocks sub-client: timestamp → block resolution.

use super::query::blocks_query;
use super::{blocks_from_entries, BlockRef};
use crate::batch::split_query;
use crate::client::PairChartClient;
use crate::error::FetchError;
use crate::shared::Resolved;
use crate::transport::{Endpoint, GraphTransport};

pub struct Blocks<'a, T> {
    pub(crate) client: &'a PairChartClient<T>,
}

impl<'a, T: GraphTransport> Blocks<'a, T> {
    /// Resolve each bucket to the latest block mined within 600 s after it.
    ///
    /// Buckets with no block are reported in `skipped`. Output order follows
    /// the batch's key order, not bucket order.
    pub async fn resolve(
        &self,
        timestamps: &[i64],
        chunk_size: usize,
    ) -> Result<Resolved<BlockRef>, FetchError> {
        if timestamps.is_empty() {
            return Ok(Resolved::default());
        }

        let batch = split_query(
            &self.client.transport,
            Endpoint::Blocks,
            timestamps,
            chunk_size,
            blocks_query,
        )
        .await?;

        let resolved = blocks_from_entries(batch.entries);
        tracing::debug!(
            buckets = timestamps.len(),
            resolved = resolved.len(),
            skipped = resolved.skipped.len(),
            requests = batch.requests,
            "Resolved blocks"
        );
        Ok(resolved)
    }
}
