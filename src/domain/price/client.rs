//! Prices sub-client: pair prices at resolved blocks.

use super::query::pair_rates_query;
use super::{samples_from_entries, PriceSample};
use crate::batch::split_query;
use crate::client::PairChartClient;
use crate::domain::block::BlockRef;
use crate::error::FetchError;
use crate::shared::{PairAddress, Resolved};
use crate::transport::{Endpoint, GraphTransport};

pub struct Prices<'a, T> {
    pub(crate) client: &'a PairChartClient<T>,
}

impl<'a, T: GraphTransport> Prices<'a, T> {
    /// Fetch the pair's prices at each block, sorted by bucket timestamp.
    pub async fn samples_at(
        &self,
        pair: &PairAddress,
        blocks: &[BlockRef],
        chunk_size: usize,
    ) -> Result<Resolved<PriceSample>, FetchError> {
        if blocks.is_empty() {
            return Ok(Resolved::default());
        }

        let batch = split_query(
            &self.client.transport,
            Endpoint::Dex,
            blocks,
            chunk_size,
            |chunk| pair_rates_query(pair, chunk),
        )
        .await?;

        let samples = samples_from_entries(batch.entries);
        tracing::debug!(
            pair = %pair,
            blocks = blocks.len(),
            samples = samples.len(),
            skipped = samples.skipped.len(),
            requests = batch.requests,
            "Fetched pair prices"
        );
        Ok(samples)
    }
}
