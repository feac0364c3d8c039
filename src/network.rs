//! Default endpoint constants.

/// Block-index subgraph used to map timestamps to block numbers.
pub const DEFAULT_BLOCKS_URL: &str =
    "https://api.thegraph.com/subgraphs/name/blocklytics/ethereum-blocks";

/// Default DEX subgraph serving pair prices.
pub const DEFAULT_DEX_URL: &str = "https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v2";

/// Index-node endpoint reporting per-subgraph sync status.
pub const DEFAULT_INDEX_NODE_URL: &str = "https://api.thegraph.com/index-node/graphql";

/// Subgraph name whose indexing status bounds the usable block range.
pub const DEFAULT_SUBGRAPH_NAME: &str = "uniswap/uniswap-v2";

/// Network name as reported by the index node.
pub const DEFAULT_NETWORK: &str = "mainnet";
