use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// The output of one MST algorithm run on one graph.
///
/// `operations_count` is a synthetic cost proxy and the two algorithms
/// count different things, so the values are only meaningful as
/// growth indicators. `execution_time_ms` is filled in by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub mst_edges: Vec<Edge>,
    pub total_cost: f64,
    pub operations_count: u64,
    pub execution_time_ms: f64,
}

impl AlgorithmResult {
    pub fn num_edges(&self) -> usize {
        self.mst_edges.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphResult {
    pub graph_id: i64,
    pub input_stats: InputStats,
    pub prim: AlgorithmResult,
    pub kruskal: AlgorithmResult,
}

impl GraphResult {
    /// True if both algorithms found the same total cost, up to
    /// `tolerance`. A tolerance of zero demands exact equality.
    pub fn costs_agree(&self, tolerance: f64) -> bool {
        costs_agree(self.prim.total_cost, self.kruskal.total_cost, tolerance)
    }
}

pub(crate) fn costs_agree(a: f64, b: f64, tolerance: f64) -> bool {
    if tolerance <= 0.0 {
        a == b
    } else {
        (a - b).abs() <= tolerance
    }
}

/// A graph that could not be processed, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFailure {
    pub graph_id: i64,
    pub message: String,
}

/// Top level of the output file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputData {
    pub results: Vec<GraphResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<GraphFailure>,
}
