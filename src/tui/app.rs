use crate::scenario::scenario::Query;
use crate::traversal::engine::FifoTraversal;

/// Dequeues per `r` press, so a negative cycle cannot freeze the UI.
const STEPS_PER_RUN: usize = 10_000;

pub struct App<'g> {
    pub traversal: FifoTraversal<'g>,
    pub running: bool,
    case: usize,
    query: Query,
}

impl<'g> App<'g> {
    pub fn new(traversal: FifoTraversal<'g>, case: usize, query: Query) -> Self {
        Self {
            traversal,
            running: true,
            case,
            query,
        }
    }

    pub fn case(&self) -> usize {
        self.case
    }

    pub fn query(&self) -> Query {
        self.query
    }

    pub fn step(&mut self) {
        self.traversal.step();
    }

    pub fn finish(&mut self) {
        self.traversal.run_for(STEPS_PER_RUN);
    }
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
