use crate::graph::graph::WeightPolicy;
use crate::scenario::runner::RunError;
use crate::scenario::scenario::CaseSource;
use crate::traversal::engine::{FifoTraversal, TraversalStats};
use crate::traversal::priority::PriorityDijkstra;
use crate::traversal::solver::{PathCost, PathSolver};
use std::fmt;

/// FIFO relaxation and priority Dijkstra on the same case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    case: usize,
    fifo: PathCost,
    /// `None` when the priority solver refused the graph
    priority: Option<PathCost>,
    stats: TraversalStats,
}

impl Comparison {
    pub fn diverges(&self) -> bool {
        self.priority.is_some_and(|p| p != self.fifo)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let priority = self
            .priority
            .map_or_else(|| "n/a".to_string(), |p| p.to_string());
        write!(
            f,
            "{:>5} {:>10} {:>10} {:>9} {:>9} {}",
            self.case,
            self.fifo.to_string(),
            priority,
            self.stats.dequeued,
            self.stats.relaxations,
            if self.diverges() { "DIFF" } else { "" }
        )
    }
}

pub const HEADER: &str = " case       fifo   priority  dequeued   relaxed";

pub fn compare_cases(source: &mut dyn CaseSource, policy: WeightPolicy) -> Result<Vec<Comparison>, RunError> {
    let mut rows = Vec::new();
    while let Some(case) = source.next_case()? {
        let number = rows.len() + 1;
        let graph = case
            .build_graph(policy)
            .map_err(|err| RunError::Graph { case: number, source: err })?;
        let query = case.query();

        let mut traversal = FifoTraversal::new(&graph, query.source, query.destination)
            .map_err(|err| RunError::Graph { case: number, source: err })?;
        traversal.run();
        let priority = PriorityDijkstra
            .solve(&graph, query.source, query.destination)
            .ok();

        rows.push(Comparison {
            case: number,
            fifo: traversal.outcome(),
            priority,
            stats: traversal.stats(),
        });
    }
    Ok(rows)
}
