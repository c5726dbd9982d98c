use crate::traversal::solver::Cost;

/// Per-node bookkeeping owned by a single traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeState {
    visited: bool,
    /// meaningful only once visited
    cost: Cost,
    dequeued: u32,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn times_dequeued(&self) -> u32 {
        self.dequeued
    }

    pub fn settle(&mut self, cost: Cost) {
        self.cost = cost;
        self.visited = true;
    }

    /// Whether reaching this node at `cost` should update it.
    pub fn improves(&self, cost: Cost) -> bool {
        !self.visited || self.cost > cost
    }

    pub fn mark_dequeued(&mut self) {
        self.dequeued += 1;
    }
}
