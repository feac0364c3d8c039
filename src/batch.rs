//! Paginated batch fetcher.
//!
//! Subgraphs cap how many aliased fields one query may carry, so a long input
//! list is split into fixed-size chunks requested one after another. Pages are
//! folded into a single alias-keyed map.

use crate::error::HttpError;
use crate::query::Document;
use crate::transport::{Endpoint, GraphTransport};
use serde_json::{Map, Value};

/// Default chunk size for price queries.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Default chunk size for block-resolution queries.
pub const DEFAULT_BLOCK_CHUNK_SIZE: usize = 500;

/// Merged result of a paginated query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    /// Raw per-input payloads keyed by field alias.
    pub entries: Map<String, Value>,
    /// Number of requests issued.
    pub requests: usize,
}

impl Batch {
    fn merge(mut self, page: Map<String, Value>) -> Self {
        self.entries.extend(page);
        self.requests += 1;
        self
    }
}

/// Run `build` over `items` in chunks of `chunk_size`, sequentially.
///
/// Stops early once a page comes back with fewer keys than `chunk_size`:
/// subgraphs omit or null out inputs they have no data for, and a short page
/// is the only end-of-data signal available. An empty `items` issues no
/// request. Transport errors propagate unchanged.
pub async fn split_query<T, I, F>(
    transport: &T,
    endpoint: Endpoint,
    items: &[I],
    chunk_size: usize,
    build: F,
) -> Result<Batch, HttpError>
where
    T: GraphTransport,
    F: Fn(&[I]) -> Document,
{
    let chunk_size = chunk_size.max(1);
    let mut batch = Batch::default();

    for (index, chunk) in items.chunks(chunk_size).enumerate() {
        let page = transport.query(endpoint, &build(chunk)).await?;
        let returned = page.len();
        tracing::debug!(
            endpoint = %endpoint,
            offset = index * chunk_size,
            size = chunk.len(),
            returned,
            "Fetched batch page"
        );
        batch = batch.merge(page);

        if returned < chunk_size {
            break;
        }
    }

    Ok(batch)
}
