//! Transport seam between the pipeline and the remote GraphQL services.
//!
//! The pipeline only needs "send this document to that service and give me the
//! `data` object back". `GraphHttp` implements it over HTTP; tests implement it
//! with canned responses.

use crate::error::HttpError;
use crate::query::Document;
use serde_json::{Map, Value};
use std::future::Future;

/// Which remote service a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Block-index subgraph (timestamp → block number).
    Blocks,
    /// DEX subgraph (pair prices at a block).
    Dex,
    /// Index-node status endpoint (chain head per subgraph).
    IndexNode,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Dex => "dex",
            Self::IndexNode => "index-node",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes a GraphQL document against one of the known endpoints.
///
/// Returns the response's `data` object keyed by field alias. A response that
/// carries GraphQL `errors` must be reported as [`HttpError::Query`].
pub trait GraphTransport {
    fn query(
        &self,
        endpoint: Endpoint,
        document: &Document,
    ) -> impl Future<Output = Result<Map<String, Value>, HttpError>>;
}
