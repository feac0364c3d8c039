//! Block-resolution query.

use crate::domain::bucket::BLOCK_WINDOW_SECS;
use crate::query::{alias, Document, Field, Value};

/// One aliased `blocks` field per bucket, asking for the latest block mined
/// strictly inside `(ts, ts + 600)`.
pub fn blocks_query(timestamps: &[i64]) -> Document {
    let fields = timestamps
        .iter()
        .map(|&ts| {
            Field::new("blocks")
                .alias(alias::encode(ts))
                .arg("first", 1i64)
                .arg("orderBy", Value::enum_literal("timestamp"))
                .arg("orderDirection", Value::enum_literal("desc"))
                .arg(
                    "where",
                    Value::object([
                        ("timestamp_gt", Value::Int(ts)),
                        ("timestamp_lt", Value::Int(ts + BLOCK_WINDOW_SECS)),
                    ]),
                )
                .select([Field::new("number")])
        })
        .collect();
    Document::new("blocks", fields)
}
