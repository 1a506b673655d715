//! Prim's algorithm: grow one tree from the first node of the graph,
//! always taking the cheapest edge that leaves the tree.
//!
//! The heap uses lazy deletion. There is no decrease-key; an entry
//! whose target joined the tree in the meantime is dropped when it is
//! popped, so the heap holds at most one entry per edge direction.
//!
//! If the graph is disconnected, only the component containing the
//! start node is spanned. Kruskal's algorithm spans every component,
//! so the two results differ on such graphs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::error::Result;
use crate::graph::{Edge, Graph, GraphData};
use crate::report::AlgorithmResult;

/// A candidate edge from the tree node `from` to the frontier node
/// `to`. Ordered so that `BinaryHeap` pops the lightest entry first,
/// and among equal weights the one pushed first.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    weight: f64,
    seq: u64,
    from: usize,
    to: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Working state of one run: the tree membership, the heap, and the
/// operation tally.
struct Frontier {
    in_tree: Vec<bool>,
    tree_size: usize,
    heap: BinaryHeap<HeapEntry>,
    next_seq: u64,
    operations: u64,
}

impl Frontier {
    fn new(num_nodes: usize) -> Frontier {
        Frontier {
            in_tree: vec![false; num_nodes],
            tree_size: 0,
            heap: BinaryHeap::new(),
            next_seq: 0,
            operations: 0,
        }
    }

    fn admit(&mut self, node: usize) {
        self.operations += 1;
        self.in_tree[node] = true;
        self.tree_size += 1;
    }

    fn contains(&mut self, node: usize) -> bool {
        self.operations += 1;
        self.in_tree[node]
    }

    fn push(&mut self, weight: f64, from: usize, to: usize) {
        self.operations += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry {
            weight,
            seq,
            from,
            to,
        });
    }

    fn pop(&mut self) -> Option<HeapEntry> {
        let entry = self.heap.pop()?;
        self.operations += 1;
        Some(entry)
    }
}

/// Computes a minimum spanning tree of the component of `graph` that
/// contains its first node.
///
/// Each edge is reported oriented from the endpoint that was already
/// in the tree to the endpoint it brought in. Fails if a node is listed
/// twice or an edge names a node that is not in the graph.
pub fn find_mst(graph: &GraphData) -> Result<AlgorithmResult> {
    if graph.nodes.is_empty() {
        return Ok(AlgorithmResult::default());
    }

    let graph = Graph::from_data(graph)?;
    let num_nodes = graph.num_nodes();

    let mut frontier = Frontier::new(num_nodes);
    let mut mst_edges = Vec::with_capacity(num_nodes - 1);
    let mut total_cost = 0.0;

    let start = 0;
    frontier.admit(start);
    for inc in graph.adjacency[start].iter() {
        frontier.push(graph.weight(inc.edge), start, inc.neighbor);
    }

    while frontier.tree_size < num_nodes {
        let entry = match frontier.pop() {
            Some(entry) => entry,
            None => break,
        };

        if frontier.contains(entry.to) {
            continue;
        }

        frontier.admit(entry.to);
        total_cost += entry.weight;
        mst_edges.push(Edge::new(
            graph.index.name(entry.from),
            graph.index.name(entry.to),
            entry.weight,
        ));

        for inc in graph.adjacency[entry.to].iter() {
            if !frontier.contains(inc.neighbor) {
                frontier.push(graph.weight(inc.edge), entry.to, inc.neighbor);
            }
        }
    }

    debug!(
        "prim: graph {} reached {} of {} nodes, {} stale heap entries left",
        graph.data.id,
        frontier.tree_size,
        num_nodes,
        frontier.heap.len()
    );

    Ok(AlgorithmResult {
        mst_edges,
        total_cost,
        operations_count: frontier.operations,
        execution_time_ms: 0.0,
    })
}
