use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating graphs, running the MST algorithms,
/// or moving graphs and reports in and out of JSON files.
#[derive(Debug, Error)]
pub enum MstError {
    /// An edge or a query names a node that is not part of the graph.
    #[error("unknown node '{node}'")]
    UnknownNode { node: String },

    /// The graph itself is malformed, e.g. a node is listed twice.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Kruskal and Prim disagree on the total cost, and the caller
    /// asked for that to be treated as a failure.
    #[error(
        "MST costs do not match for graph {graph_id}: prim {prim} != kruskal {kruskal}"
    )]
    CostMismatch {
        graph_id: i64,
        prim: f64,
        kruskal: f64,
    },

    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MstError {
    pub(crate) fn unknown_node(node: &str) -> Self {
        MstError::UnknownNode {
            node: node.to_string(),
        }
    }

    pub(crate) fn duplicate_node(node: &str) -> Self {
        MstError::InvalidInput(format!("duplicate node '{}'", node))
    }
}

pub type Result<T> = std::result::Result<T, MstError>;
