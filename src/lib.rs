//! # pair-chart
//!
//! Historical price series for a DEX pair, reconstructed from subgraph
//! snapshots and shaped for charting.
//!
//! Subgraphs only expose instantaneous pair prices, so history is sampled: the
//! chart span is cut into time buckets, each bucket is resolved to a block via
//! a block-index subgraph, the pair is queried at each block, and adjacent
//! samples are turned into line points or synthetic candles.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Query AST, domain types and pure transforms (always available)
//! 2. **Transport**: `GraphTransport` seam; `GraphHttp` over reqwest with retry policies
//! 3. **Pipeline**: Paginated batch fetcher and `PairChartClient` with nested sub-clients
//! 4. **Chart Adapter**: `TradingChart` driving any `ChartBackend`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pair_chart::prelude::*;
//!
//! let client = PairChartClient::builder()
//!     .dex_url("https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v2")
//!     .build()?;
//!
//! let pair = PairAddress::parse("0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc")?;
//! let candles = client.fetch_series(&pair, Span::Week1, SeriesKind::Candle).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Typed GraphQL documents and field aliasing.
pub mod query;

/// Domain modules (vertical slices): types, wire types, queries, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// Default endpoint constants.
pub mod network;

/// Pipeline configuration.
pub mod config;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// Transport trait and endpoint selector.
pub mod transport;

/// GraphQL-over-HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Pipeline ────────────────────────────────────────────────────────

/// Chunked, sequential batch queries.
pub mod batch;

/// `PairChartClient`: the primary entry point.
pub mod client;

// ── Layer 4: Chart Adapter ───────────────────────────────────────────────────

/// `TradingChart` and the `ChartBackend` trait.
pub mod chart;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{PairAddress, Resolved, SeriesKind};

    // Domain types
    pub use crate::domain::block::BlockRef;
    pub use crate::domain::bucket::Span;
    pub use crate::domain::price::{Candle, LinePoint, PriceSample, Series};

    // Errors
    pub use crate::error::{FetchError, HttpError};

    // Config + network
    pub use crate::config::ChartConfig;
    pub use crate::network::{DEFAULT_BLOCKS_URL, DEFAULT_DEX_URL, DEFAULT_INDEX_NODE_URL};

    // Transport
    pub use crate::transport::{Endpoint, GraphTransport};
    #[cfg(feature = "http")]
    pub use crate::http::{GraphHttp, RetryConfig, RetryPolicy};

    // Client + sub-clients
    pub use crate::client::{
        BlocksClient, ChainHeadSubClient, PairChartClient, PricesClient, SeriesReport,
    };
    #[cfg(feature = "http")]
    pub use crate::client::PairChartClientBuilder;

    // Chart adapter
    pub use crate::chart::{CandleStyle, ChartBackend, TradingChart};
}
