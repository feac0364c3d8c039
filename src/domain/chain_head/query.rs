//! Indexing-status query.

use crate::query::{Document, Field};

pub fn indexing_status_query(subgraph_name: &str) -> Document {
    let block = |name: &str| Field::new(name).select([Field::new("number")]);
    Document::new(
        "health",
        vec![Field::new("indexingStatusForCurrentVersion")
            .arg("subgraphName", subgraph_name)
            .select([
                Field::new("synced"),
                Field::new("health"),
                Field::new("chains").select([
                    Field::new("network"),
                    block("chainHeadBlock"),
                    block("latestBlock"),
                ]),
            ])],
    )
}
