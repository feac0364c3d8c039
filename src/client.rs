//! High-level client: `PairChartClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared configuration, and the
//! end-to-end pipeline that chains the sub-clients together.

use crate::config::ChartConfig;
use crate::domain::block::client::Blocks;
use crate::domain::bucket::Span;
use crate::domain::chain_head::client::ChainHeadClient;
use crate::domain::chain_head::retain_confirmed;
use crate::domain::price::client::Prices;
use crate::domain::price::Series;
use crate::error::FetchError;
use crate::shared::{PairAddress, SeriesKind};
use crate::transport::GraphTransport;

#[cfg(feature = "http")]
use crate::http::{Endpoints, GraphHttp};

// Re-export sub-client types for convenience.
pub use crate::domain::block::client::Blocks as BlocksClient;
pub use crate::domain::chain_head::client::ChainHeadClient as ChainHeadSubClient;
pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point: turns a pair and a span into a chart series.
///
/// Generic over the transport so the pipeline can run against any GraphQL
/// backend; `PairChartClient::builder()` wires up the HTTP one.
#[derive(Debug, Clone)]
pub struct PairChartClient<T> {
    pub(crate) transport: T,
    pub(crate) config: ChartConfig,
}

/// Outcome of one pipeline run, with per-stage drop counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesReport {
    pub series: Series,
    /// Buckets generated for the span.
    pub buckets: usize,
    /// Buckets with no block mined in their window.
    pub unresolved_buckets: usize,
    /// Resolved blocks beyond the indexer's head.
    pub stale_blocks: usize,
    /// Confirmed blocks that returned no pair data.
    pub skipped_prices: usize,
}

impl SeriesReport {
    fn empty(kind: SeriesKind) -> Self {
        Self {
            series: Series::empty(kind),
            buckets: 0,
            unresolved_buckets: 0,
            stale_blocks: 0,
            skipped_prices: 0,
        }
    }
}

impl<T> PairChartClient<T> {
    pub fn with_transport(transport: T, config: ChartConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn blocks(&self) -> Blocks<'_, T> {
        Blocks { client: self }
    }

    pub fn chain_head(&self) -> ChainHeadClient<'_, T> {
        ChainHeadClient { client: self }
    }

    pub fn prices(&self) -> Prices<'_, T> {
        Prices { client: self }
    }
}

impl<T: GraphTransport> PairChartClient<T> {
    /// Fetch the pair's series for `span`, ending now.
    pub async fn fetch_series(
        &self,
        pair: &PairAddress,
        span: Span,
        kind: SeriesKind,
    ) -> Result<Series, FetchError> {
        let now = chrono::Utc::now().timestamp();
        Ok(self.fetch_report(pair, span, kind, now).await?.series)
    }

    /// Run the whole pipeline for `span` ending at `now`.
    ///
    /// buckets → blocks → chain-head filter → prices → series. Missing data
    /// at any stage shrinks the series; only transport failures on the block
    /// or price queries are errors. The chain-head check fails open.
    pub async fn fetch_report(
        &self,
        pair: &PairAddress,
        span: Span,
        kind: SeriesKind,
        now: i64,
    ) -> Result<SeriesReport, FetchError> {
        let mut report = SeriesReport::empty(kind);

        let buckets = span.buckets(now);
        report.buckets = buckets.len();
        if buckets.is_empty() {
            return Ok(report);
        }

        let blocks = self
            .blocks()
            .resolve(&buckets, self.config.block_chunk_size)
            .await?;
        report.unresolved_buckets = buckets.len().saturating_sub(blocks.len());
        if blocks.is_empty() {
            return Ok(report);
        }

        let latest = match self.chain_head().latest_block().await {
            Ok(latest) => latest,
            Err(e) => {
                tracing::warn!(error = %e, "Chain head unavailable, skipping staleness filter");
                None
            }
        };
        let confirmed = retain_confirmed(blocks.items, latest);
        report.stale_blocks = confirmed.skipped.len();

        let samples = self
            .prices()
            .samples_at(pair, &confirmed.items, self.config.price_chunk_size)
            .await?;
        report.skipped_prices = confirmed.items.len().saturating_sub(samples.len());
        report.series = Series::derive(&samples.items, kind);

        tracing::debug!(
            pair = %pair,
            span = %span,
            kind = %kind,
            buckets = report.buckets,
            unresolved = report.unresolved_buckets,
            stale = report.stale_blocks,
            skipped_prices = report.skipped_prices,
            points = report.series.len(),
            "Built price series"
        );
        Ok(report)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
impl PairChartClient<GraphHttp> {
    pub fn builder() -> PairChartClientBuilder {
        PairChartClientBuilder::default()
    }
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct PairChartClientBuilder {
    config: ChartConfig,
    api_key: Option<String>,
}

#[cfg(feature = "http")]
impl PairChartClientBuilder {
    /// Replace the whole configuration (e.g. one loaded from a file).
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dex_url(mut self, url: &str) -> Self {
        self.config.dex_url = url.to_string();
        self
    }

    pub fn blocks_url(mut self, url: &str) -> Self {
        self.config.blocks_url = url.to_string();
        self
    }

    pub fn index_node_url(mut self, url: &str) -> Self {
        self.config.index_node_url = url.to_string();
        self
    }

    pub fn subgraph_name(mut self, name: &str) -> Self {
        self.config.subgraph_name = name.to_string();
        self
    }

    pub fn network(mut self, network: &str) -> Self {
        self.config.network = network.to_string();
        self
    }

    pub fn block_chunk_size(mut self, size: usize) -> Self {
        self.config.block_chunk_size = size;
        self
    }

    pub fn price_chunk_size(mut self, size: usize) -> Self {
        self.config.price_chunk_size = size;
        self
    }

    /// Gateway API key, sent as a bearer token.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn build(self) -> Result<PairChartClient<GraphHttp>, FetchError> {
        if self.config.block_chunk_size == 0 || self.config.price_chunk_size == 0 {
            return Err(FetchError::Validation(
                "Chunk sizes must be greater than zero".to_string(),
            ));
        }

        let http = GraphHttp::new(Endpoints::from(&self.config), self.api_key)?;
        Ok(PairChartClient::with_transport(http, self.config))
    }
}
