use crate::graph::error::GraphError;
use crate::graph::graph::WeightPolicy;
use crate::scenario::reader::InputError;
use crate::scenario::scenario::CaseSource;
use crate::traversal::solver::{PathCost, PathSolver};
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("test case {case}: {source}")]
    Graph {
        case: usize,
        #[source]
        source: GraphError,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    pub policy: WeightPolicy,
    /// report each solve's elapsed time at info level
    pub timing: bool,
}

/// Solves every case from `source` in order. Stops at the first error.
pub fn run_cases(
    source: &mut dyn CaseSource,
    solver: &dyn PathSolver,
    options: RunOptions,
) -> Result<Vec<PathCost>, RunError> {
    let mut results = Vec::new();
    while let Some(case) = source.next_case()? {
        let number = results.len() + 1;
        let graph = case
            .build_graph(options.policy)
            .map_err(|err| RunError::Graph { case: number, source: err })?;
        let query = case.query();

        let started = Instant::now();
        let cost = solver
            .solve(&graph, query.source, query.destination)
            .map_err(|err| RunError::Graph { case: number, source: err })?;
        let elapsed = started.elapsed();

        if options.timing {
            info!(case = number, solver = solver.name(), ?elapsed, %cost, "solved");
        } else {
            debug!(case = number, solver = solver.name(), ?elapsed, %cost, "solved");
        }
        results.push(cost);
    }
    Ok(results)
}

pub fn write_results(out: &mut impl Write, results: &[PathCost]) -> io::Result<()> {
    for cost in results {
        writeln!(out, "{}", cost)?;
    }
    out.flush()
}
