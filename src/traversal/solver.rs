use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use crate::traversal::engine::FifoTraversal;
use crate::traversal::priority::PriorityDijkstra;
use clap::ValueEnum;
use std::fmt;
use tracing::debug;

pub type Cost = i64;

/// Output value for a destination that was never reached.
pub const UNREACHABLE: Cost = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCost {
    Reached(Cost),
    Unreachable,
}

impl PathCost {
    pub fn as_output(&self) -> Cost {
        match self {
            PathCost::Reached(cost) => *cost,
            PathCost::Unreachable => UNREACHABLE,
        }
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_output())
    }
}

pub trait PathSolver {
    fn name(&self) -> &'static str;
    fn solve(&self, graph: &Graph, source: NodeId, destination: NodeId) -> Result<PathCost, GraphError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SolverMode {
    /// FIFO queue relaxation, drained to exhaustion
    #[default]
    Fifo,
    /// Binary-heap Dijkstra, non-negative weights only
    Priority,
}

impl SolverMode {
    pub fn solver(self) -> Box<dyn PathSolver> {
        match self {
            SolverMode::Fifo => Box::new(FifoSolver),
            SolverMode::Priority => Box::new(PriorityDijkstra),
        }
    }
}

pub struct FifoSolver;

impl PathSolver for FifoSolver {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn solve(&self, graph: &Graph, source: NodeId, destination: NodeId) -> Result<PathCost, GraphError> {
        let mut traversal = FifoTraversal::new(graph, source, destination)?;
        traversal.run();
        let stats = traversal.stats();
        debug!(
            %source,
            %destination,
            dequeued = stats.dequeued,
            relaxations = stats.relaxations,
            peak_queue = stats.peak_queue,
            "fifo traversal drained"
        );
        Ok(traversal.outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph::WeightPolicy;

    fn scenario_a() -> Graph {
        let mut graph = Graph::with_nodes(3, WeightPolicy::Permissive);
        graph.add_edge(NodeId(1), NodeId(2), 1).unwrap();
        graph.add_edge(NodeId(2), NodeId(3), 1).unwrap();
        graph.add_edge(NodeId(1), NodeId(3), 5).unwrap();
        graph
    }

    #[test]
    fn test_unreachable_prints_sentinel() {
        assert_eq!(-1, PathCost::Unreachable.as_output());
        assert_eq!("-1", PathCost::Unreachable.to_string());
        assert_eq!("12", PathCost::Reached(12).to_string());
    }

    #[test]
    fn test_both_modes_solve_scenario_a() {
        let graph = scenario_a();
        for mode in [SolverMode::Fifo, SolverMode::Priority] {
            let cost = mode.solver().solve(&graph, NodeId(1), NodeId(3)).unwrap();
            assert_eq!(PathCost::Reached(2), cost, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_both_modes_report_unknown_endpoints() {
        let graph = scenario_a();
        for mode in [SolverMode::Fifo, SolverMode::Priority] {
            let solver = mode.solver();
            assert_eq!(
                Err(GraphError::UnknownNode(NodeId(4))),
                solver.solve(&graph, NodeId(4), NodeId(1))
            );
            assert_eq!(
                Err(GraphError::UnknownNode(NodeId(9))),
                solver.solve(&graph, NodeId(1), NodeId(9))
            );
        }
    }

    #[test]
    fn test_graph_can_be_queried_repeatedly() {
        let graph = scenario_a();
        let solver = FifoSolver;
        assert_eq!(Ok(PathCost::Reached(2)), solver.solve(&graph, NodeId(1), NodeId(3)));
        assert_eq!(Ok(PathCost::Reached(1)), solver.solve(&graph, NodeId(2), NodeId(3)));
        assert_eq!(Ok(PathCost::Unreachable), solver.solve(&graph, NodeId(3), NodeId(1)));
        assert_eq!(Ok(PathCost::Reached(2)), solver.solve(&graph, NodeId(1), NodeId(3)));
    }
}
