//! Kruskal's algorithm: sort the edges by weight and keep every edge
//! that joins two different components.

use log::debug;

use crate::dsu::DisjointSetUnion;
use crate::error::Result;
use crate::graph::GraphData;
use crate::report::AlgorithmResult;

/// Estimated cost of sorting `num_edges` edges, `E * log2(E)`.
/// This is a closed-form proxy, not a count of comparisons.
pub fn sort_cost_estimate(num_edges: usize) -> u64 {
    if num_edges == 0 {
        0
    } else {
        let e = num_edges as f64;
        (e * e.log2()) as u64
    }
}

/// Computes a minimum spanning forest of `graph`. On a connected graph
/// with `n` nodes this is a spanning tree with `n - 1` edges.
///
/// The graph is not modified. Fails if a node is listed twice or an
/// edge names a node that is not in the graph.
pub fn find_mst(graph: &GraphData) -> Result<AlgorithmResult> {
    if graph.nodes.is_empty() {
        return Ok(AlgorithmResult::default());
    }

    let mut dsu = DisjointSetUnion::new(&graph.nodes)?;

    let mut edges = Vec::with_capacity(graph.edges.len());
    for edge in graph.edges.iter() {
        let from_ix = dsu.index().get(&edge.from)?;
        let to_ix = dsu.index().get(&edge.to)?;
        edges.push((from_ix, to_ix, edge));
    }

    // stable, so equal weights keep their input order
    edges.sort_by(|(_, _, a), (_, _, b)| a.weight.total_cmp(&b.weight));

    let target = graph.nodes.len() - 1;
    let mut mst_edges = Vec::with_capacity(target);
    let mut total_cost = 0.0;

    for (from_ix, to_ix, edge) in edges {
        if mst_edges.len() == target {
            break;
        }

        if dsu.union_ix(from_ix, to_ix) {
            total_cost += edge.weight;
            mst_edges.push(edge.clone());
        }
    }

    debug!(
        "kruskal: graph {} admitted {} of {} edges, {} components",
        graph.id,
        mst_edges.len(),
        graph.edges.len(),
        dsu.set_count()
    );

    let operations_count =
        sort_cost_estimate(graph.edges.len()) + dsu.operations_performed();

    Ok(AlgorithmResult {
        mst_edges,
        total_cost,
        operations_count,
        execution_time_ms: 0.0,
    })
}
