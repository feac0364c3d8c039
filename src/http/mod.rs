//! HTTP transport layer: `GraphHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::{Endpoints, GraphHttp};
pub use retry::{RetryConfig, RetryPolicy};
