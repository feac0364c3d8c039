//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains (where applicable):
//! - `mod.rs`: Domain types and pure logic
//! - `wire.rs`: Raw serde structs matching subgraph responses
//! - `query.rs`: Typed GraphQL documents for the slice's endpoint
//! - `convert.rs`: Alias-keyed payloads → domain types, with skip accounting
//! - `client.rs`: Sub-client running the slice's remote queries

pub mod block;
pub mod bucket;
pub mod chain_head;
pub mod price;
