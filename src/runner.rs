//! Runs both MST algorithms on each graph of a batch and collects the
//! results into an `OutputData` report.

use std::time::Instant;

use log::{error, info, warn};

use crate::error::{MstError, Result};
use crate::graph::{GraphData, InputData};
use crate::kruskal;
use crate::prim;
use crate::report::{AlgorithmResult, GraphFailure, GraphResult, InputStats, OutputData};

/// How the runner treats disagreement between the two algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    /// Largest accepted absolute difference between the two total
    /// costs. Zero means the costs must be exactly equal.
    pub tolerance: f64,
    /// Turn a cost mismatch into a failure of that graph instead of a
    /// logged warning.
    pub strict: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            tolerance: 0.0,
            strict: false,
        }
    }
}

fn timed<F>(run: F) -> Result<AlgorithmResult>
where
    F: FnOnce() -> Result<AlgorithmResult>,
{
    let start = Instant::now();
    let mut result = run()?;
    result.execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok(result)
}

fn log_algorithm(name: &str, result: &AlgorithmResult) {
    info!(
        "  {:<10} Cost={}, Ops={}, Time={:.2}ms",
        name, result.total_cost, result.operations_count, result.execution_time_ms
    );
}

/// Runs Prim's and then Kruskal's algorithm on `graph`, timing each.
pub fn process_graph(graph: &GraphData, config: &RunConfig) -> Result<GraphResult> {
    info!("Processing Graph ID: {}", graph.id);

    let prim = timed(|| prim::find_mst(graph))?;
    log_algorithm("Prim's:", &prim);

    let kruskal = timed(|| kruskal::find_mst(graph))?;
    log_algorithm("Kruskal's:", &kruskal);

    let result = GraphResult {
        graph_id: graph.id,
        input_stats: InputStats {
            vertices: graph.num_nodes(),
            edges: graph.num_edges(),
        },
        prim,
        kruskal,
    };

    if !result.costs_agree(config.tolerance) {
        if config.strict {
            return Err(MstError::CostMismatch {
                graph_id: graph.id,
                prim: result.prim.total_cost,
                kruskal: result.kruskal.total_cost,
            });
        }
        warn!(
            "MST costs do not match for Graph ID {}: prim {} != kruskal {}",
            graph.id, result.prim.total_cost, result.kruskal.total_cost
        );
    }

    Ok(result)
}

/// Processes every graph in `input`. A graph that fails is logged and
/// recorded in `failures`; the remaining graphs are still processed.
pub fn process_all(input: &InputData, config: &RunConfig) -> OutputData {
    let mut output = OutputData::default();

    for graph in input.graphs.iter() {
        match process_graph(graph, config) {
            Ok(result) => output.results.push(result),
            Err(err) => {
                error!("Graph ID {} failed: {}", graph.id, err);
                output.failures.push(GraphFailure {
                    graph_id: graph.id,
                    message: err.to_string(),
                });
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn triangle(id: i64) -> GraphData {
        GraphData::new(
            id,
            &["A", "B", "C"],
            vec![
                Edge::new("A", "B", 1.0),
                Edge::new("B", "C", 2.0),
                Edge::new("A", "C", 3.0),
            ],
        )
    }

    #[test]
    fn fills_stats_and_timing() {
        let result = process_graph(&triangle(7), &RunConfig::default()).unwrap();

        assert_eq!(result.graph_id, 7);
        assert_eq!(
            result.input_stats,
            InputStats {
                vertices: 3,
                edges: 3
            }
        );
        assert!(result.prim.execution_time_ms >= 0.0);
        assert!(result.kruskal.execution_time_ms >= 0.0);
        assert!(result.costs_agree(0.0));
    }

    #[test]
    fn disconnected_mismatch_is_a_warning_unless_strict() {
        let graph = GraphData::new(
            3,
            &["A", "B", "C", "D"],
            vec![Edge::new("A", "B", 1.0), Edge::new("C", "D", 1.0)],
        );

        let result = process_graph(&graph, &RunConfig::default()).unwrap();
        assert!(!result.costs_agree(0.0));

        let strict = RunConfig {
            strict: true,
            ..RunConfig::default()
        };
        match process_graph(&graph, &strict) {
            Err(MstError::CostMismatch { graph_id, .. }) => assert_eq!(graph_id, 3),
            other => panic!("expected CostMismatch, got {:?}", other),
        }
    }

    #[test]
    fn tolerance() {
        let loose = RunConfig {
            tolerance: 1.5,
            strict: true,
        };
        let graph = GraphData::new(
            4,
            &["A", "B", "C", "D"],
            vec![Edge::new("A", "B", 1.0), Edge::new("C", "D", 1.0)],
        );
        assert!(process_graph(&graph, &loose).is_ok());
    }

    #[test]
    fn failed_graph_does_not_stop_the_batch() {
        let broken = GraphData::new(2, &["A", "B"], vec![Edge::new("A", "X", 1.0)]);
        let input = InputData {
            graphs: vec![triangle(1), broken, triangle(3)],
        };

        let output = process_all(&input, &RunConfig::default());

        let ids: Vec<i64> = output.results.iter().map(|r| r.graph_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].graph_id, 2);
        assert!(output.failures[0].message.contains("'X'"));
    }
}
