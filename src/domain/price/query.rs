//! Pair price query.

use crate::domain::block::BlockRef;
use crate::query::{alias, Document, Field, Value};
use crate::shared::PairAddress;

/// One aliased `pair` field per block, time-travelling to that block height.
///
/// Aliases use the block's bucket timestamp so results map straight back
/// onto the chart's time axis.
pub fn pair_rates_query(pair: &PairAddress, blocks: &[BlockRef]) -> Document {
    let fields = blocks
        .iter()
        .map(|block| {
            Field::new("pair")
                .alias(alias::encode(block.timestamp))
                .arg("id", pair.as_str())
                .arg("block", Value::object([("number", Value::UInt(block.number))]))
                .select([Field::new("token0Price"), Field::new("token1Price")])
        })
        .collect();
    Document::new("blocks", fields)
}
