use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{MstError, Result};

/// An undirected, weighted edge. `(a, b, w)` and `(b, a, w)` describe
/// the same edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: &str, to: &str, weight: f64) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }
}

/// A single input graph. The node order matters only to Prim's
/// algorithm, which starts from the first node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub id: i64,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn new(id: i64, nodes: &[&str], edges: Vec<Edge>) -> GraphData {
        GraphData {
            id,
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            edges,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

/// Top level of the input file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    #[serde(default)]
    pub graphs: Vec<GraphData>,
}

/// Maps node names to dense indices `0..n` in the order the nodes
/// were given, and back.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    name_map: FxHashMap<String, usize>,
    inv_names: Vec<String>,
}

impl NodeIndex {
    /// Fails with `InvalidInput` if a name appears twice.
    pub fn from_nodes<S: AsRef<str>>(nodes: &[S]) -> Result<NodeIndex> {
        let mut name_map = FxHashMap::default();
        name_map.reserve(nodes.len());
        let mut inv_names = Vec::with_capacity(nodes.len());

        for name in nodes {
            let name = name.as_ref();
            let ix = inv_names.len();
            if name_map.insert(name.to_string(), ix).is_some() {
                return Err(MstError::duplicate_node(name));
            }
            inv_names.push(name.to_string());
        }

        Ok(NodeIndex {
            name_map,
            inv_names,
        })
    }

    pub fn get(&self, name: &str) -> Result<usize> {
        self.name_map
            .get(name)
            .copied()
            .ok_or_else(|| MstError::unknown_node(name))
    }

    pub fn name(&self, ix: usize) -> &str {
        &self.inv_names[ix]
    }

    pub fn len(&self) -> usize {
        self.inv_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inv_names.is_empty()
    }
}

/// One entry in a node's adjacency list: the neighbor's index and the
/// position of the edge in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    pub neighbor: usize,
    pub edge: usize,
}

pub type AdjacencyList = Vec<Incidence>;

/// An adjacency list representation of a `GraphData`, indexed by the
/// node indices of its `NodeIndex`. Every edge is listed under both of
/// its endpoints.
#[derive(Debug, Clone)]
pub struct Graph<'a> {
    pub data: &'a GraphData,
    pub index: NodeIndex,
    pub adjacency: Vec<AdjacencyList>,
}

impl<'a> Graph<'a> {
    /// Validates the node list and every edge endpoint while building
    /// the adjacency lists.
    pub fn from_data(data: &'a GraphData) -> Result<Graph<'a>> {
        let index = NodeIndex::from_nodes(&data.nodes)?;
        let mut adjacency: Vec<AdjacencyList> = vec![Vec::new(); index.len()];

        for (edge_ix, edge) in data.edges.iter().enumerate() {
            let from_ix = index.get(&edge.from)?;
            let to_ix = index.get(&edge.to)?;

            adjacency[from_ix].push(Incidence {
                neighbor: to_ix,
                edge: edge_ix,
            });
            adjacency[to_ix].push(Incidence {
                neighbor: from_ix,
                edge: edge_ix,
            });
        }

        Ok(Graph {
            data,
            index,
            adjacency,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.index.len()
    }

    pub fn weight(&self, edge: usize) -> f64 {
        self.data.edges[edge].weight
    }
}
