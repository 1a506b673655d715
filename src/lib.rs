pub mod dsu;
pub mod error;
pub mod graph;
pub mod io;
pub mod kruskal;
pub mod prim;
pub mod report;
pub mod runner;

pub use dsu::DisjointSetUnion;
pub use error::{MstError, Result};
pub use graph::{Edge, GraphData, InputData};
pub use report::{AlgorithmResult, GraphResult, OutputData};
pub use runner::{process_all, process_graph, RunConfig};
