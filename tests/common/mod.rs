//! Shared fixtures for integration tests: a scripted GraphQL transport.

#![allow(dead_code)]

use pair_chart::error::HttpError;
use pair_chart::query::{alias, Document, Value as QueryValue};
use pair_chart::transport::{Endpoint, GraphTransport};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::sync::Mutex;

pub const PAIR: &str = "0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc";
pub const FIRST_BLOCK: u64 = 18_000_000;

/// Scripted subgraphs: which buckets have blocks, which blocks have prices,
/// and where the indexer's head is.
pub struct FakeGraph {
    /// Buckets with no block in their window.
    pub missing_blocks: HashSet<i64>,
    /// Buckets whose pair lookup returns `null`.
    pub missing_prices: HashSet<i64>,
    /// Latest indexed block; `None` makes the index node report no status.
    pub latest_block: Option<u64>,
    /// Endpoint that fails every request.
    pub failing: Option<Endpoint>,
    /// First bucket, used to derive deterministic block numbers.
    pub origin: i64,
    pub calls: Mutex<Vec<(Endpoint, usize)>>,
}

impl FakeGraph {
    pub fn new(origin: i64) -> Self {
        Self {
            missing_blocks: HashSet::new(),
            missing_prices: HashSet::new(),
            latest_block: Some(u64::MAX),
            failing: None,
            origin,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Block number for a bucket: one block per 600 s after `origin`.
    pub fn block_for(&self, ts: i64) -> u64 {
        FIRST_BLOCK + ((ts - self.origin) / 600) as u64
    }

    /// Price reported for a bucket: rises by 0.5 per 600 s.
    pub fn price_for(&self, ts: i64) -> f64 {
        1000.0 + (ts - self.origin) as f64 / 1200.0
    }

    pub fn requests_to(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| *e == endpoint)
            .count()
    }

    fn answer(&self, endpoint: Endpoint, document: &Document) -> Map<String, Value> {
        match endpoint {
            Endpoint::Blocks => document
                .aliases()
                .map(|a| {
                    let ts = alias::decode(a).expect("bucket alias");
                    let rows = if self.missing_blocks.contains(&ts) {
                        json!([])
                    } else {
                        json!([{ "number": self.block_for(ts).to_string() }])
                    };
                    (a.to_string(), rows)
                })
                .collect(),
            Endpoint::Dex => document
                .fields
                .iter()
                .map(|field| {
                    let key = field.alias.clone().expect("aliased pair field");
                    let ts = alias::decode(&key).expect("bucket alias");
                    let number = field
                        .argument("block")
                        .and_then(|b| b.get("number"))
                        .and_then(QueryValue::as_u64)
                        .expect("block number argument");
                    assert_eq!(number, self.block_for(ts));
                    let pair = if self.missing_prices.contains(&ts) {
                        Value::Null
                    } else {
                        let price = self.price_for(ts);
                        json!({
                            "token0Price": price.to_string(),
                            "token1Price": (1.0 / price).to_string(),
                        })
                    };
                    (key, pair)
                })
                .collect(),
            Endpoint::IndexNode => {
                let status = match self.latest_block {
                    Some(n) => json!({
                        "synced": true,
                        "health": "healthy",
                        "chains": [{
                            "network": "mainnet",
                            "chainHeadBlock": { "number": n.to_string() },
                            "latestBlock": { "number": n.to_string() },
                        }],
                    }),
                    None => Value::Null,
                };
                let mut data = Map::new();
                data.insert("indexingStatusForCurrentVersion".to_string(), status);
                data
            }
        }
    }
}

impl GraphTransport for FakeGraph {
    async fn query(
        &self,
        endpoint: Endpoint,
        document: &Document,
    ) -> Result<Map<String, Value>, HttpError> {
        self.calls.lock().unwrap().push((endpoint, document.fields.len()));
        if self.failing == Some(endpoint) {
            return Err(HttpError::ServerError {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        Ok(self.answer(endpoint, document))
    }
}
