use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::node::{NodeId, NodeIndex};
use crate::state::node_state::NodeState;
use crate::traversal::solver::{Cost, PathCost};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    pub dequeued: usize,
    pub relaxations: usize,
    pub peak_queue: usize,
}

/// One dequeue and the neighbors it relaxed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    node: NodeIndex,
    cost: Cost,
    relaxed: Vec<NodeIndex>,
}

impl Step {
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn relaxed(&self) -> &[NodeIndex] {
        &self.relaxed
    }
}

/// FIFO relaxation over a borrowed graph.
///
/// Nodes are dequeued in discovery order and their outgoing edges relaxed
/// against whatever cost they hold at that moment. A node whose cost improves
/// is enqueued again, so the queue may hold the same node several times. The
/// traversal keeps draining after the destination has been dequeued.
pub struct FifoTraversal<'g> {
    graph: &'g Graph,
    source: NodeIndex,
    destination: NodeIndex,
    queue: VecDeque<NodeIndex>,
    states: Vec<NodeState>,
    arrived: bool,
    stats: TraversalStats,
    last_step: Option<Step>,
}

impl<'g> FifoTraversal<'g> {
    pub fn new(graph: &'g Graph, source: NodeId, destination: NodeId) -> Result<Self, GraphError> {
        let source = graph.index_of(source)?;
        let destination = graph.index_of(destination)?;

        let mut states = vec![NodeState::new(); graph.node_count()];
        states[source.index()].settle(0);
        let mut queue = VecDeque::new();
        queue.push_back(source);

        Ok(Self {
            graph,
            source,
            destination,
            queue,
            states,
            arrived: false,
            stats: TraversalStats {
                peak_queue: 1,
                ..TraversalStats::default()
            },
            last_step: None,
        })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    pub fn queue(&self) -> &VecDeque<NodeIndex> {
        &self.queue
    }

    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    #[cfg(test)]
    pub fn arrived(&self) -> bool {
        self.arrived
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    pub fn last_step(&self) -> Option<&Step> {
        self.last_step.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    /// Dequeues one node and relaxes its outgoing edges. Returns `false` once
    /// the queue is empty.
    pub fn step(&mut self) -> bool {
        let Some(current) = self.queue.pop_front() else {
            return false;
        };
        self.stats.dequeued += 1;
        self.states[current.index()].mark_dequeued();
        if current == self.destination {
            self.arrived = true;
        }

        let graph = self.graph;
        let current_cost = self.states[current.index()].cost();
        let mut relaxed = Vec::new();
        for e_id in graph.outgoing(current) {
            let edge = graph.edge(*e_id);
            let candidate = current_cost + Cost::from(edge.weight());
            let neighbor = &mut self.states[edge.to().index()];
            if neighbor.improves(candidate) {
                neighbor.settle(candidate);
                self.queue.push_back(edge.to());
                relaxed.push(edge.to());
            }
        }

        self.stats.relaxations += relaxed.len();
        self.stats.peak_queue = self.stats.peak_queue.max(self.queue.len());
        self.last_step = Some(Step {
            node: current,
            cost: current_cost,
            relaxed,
        });
        true
    }

    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Performs at most `max_steps` dequeues and returns how many ran.
    pub fn run_for(&mut self, max_steps: usize) -> usize {
        (0..max_steps).take_while(|_| self.step()).count()
    }

    /// Result so far. Only final once the queue has drained.
    pub fn outcome(&self) -> PathCost {
        if self.arrived {
            PathCost::Reached(self.states[self.destination.index()].cost())
        } else {
            PathCost::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph::WeightPolicy;

    fn graph(nodes: u32, edges: &[(u32, u32, i32)]) -> Graph {
        let mut graph = Graph::with_nodes(nodes, WeightPolicy::Permissive);
        edges.iter().for_each(|(from, to, w)| {
            graph.add_edge(NodeId(*from), NodeId(*to), *w).unwrap();
        });
        graph
    }

    fn solve(graph: &Graph, source: u32, destination: u32) -> PathCost {
        let mut traversal = FifoTraversal::new(graph, NodeId(source), NodeId(destination)).unwrap();
        traversal.run();
        traversal.outcome()
    }

    #[test]
    fn test_later_discovery_improves_direct_edge() {
        let g = graph(3, &[(1, 2, 1), (2, 3, 1), (1, 3, 5)]);
        assert_eq!(PathCost::Reached(2), solve(&g, 1, 3));
    }

    #[test]
    fn test_no_edges_is_unreachable() {
        let g = graph(2, &[]);
        assert_eq!(PathCost::Unreachable, solve(&g, 1, 2));
        assert_eq!(-1, solve(&g, 1, 2).as_output());
    }

    #[test]
    fn test_source_equals_destination_costs_zero() {
        let g = graph(2, &[(1, 2, 4), (2, 1, 4)]);
        assert_eq!(PathCost::Reached(0), solve(&g, 1, 1));
        assert_eq!(PathCost::Reached(0), solve(&g, 2, 2));
    }

    #[test]
    fn test_reverse_edge_is_not_usable() {
        let g = graph(2, &[(1, 2, 3)]);
        assert_eq!(PathCost::Reached(3), solve(&g, 1, 2));
        assert_eq!(PathCost::Unreachable, solve(&g, 2, 1));
    }

    #[test]
    fn test_result_bounded_by_hand_built_paths() {
        // 1 -> 2 -> 4 -> 5 costs 9, 1 -> 3 -> 5 costs 12, 1 -> 3 -> 4 -> 5 costs 7
        let g = graph(
            5,
            &[(1, 2, 2), (1, 3, 1), (2, 4, 3), (3, 5, 11), (3, 4, 2), (4, 5, 4)],
        );
        let cost = solve(&g, 1, 5).as_output();
        assert!(cost >= 0);
        assert!(cost <= 9);
        assert!(cost <= 12);
        assert_eq!(7, cost);
    }

    #[test]
    fn test_keeps_draining_after_destination() {
        let g = graph(4, &[(1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        let mut traversal = FifoTraversal::new(&g, NodeId(1), NodeId(2)).unwrap();
        traversal.run();
        assert!(traversal.arrived());
        assert_eq!(4, traversal.stats().dequeued);
        assert!(traversal.states().iter().all(|s| s.is_visited()));
    }

    #[test]
    fn test_improved_node_is_enqueued_again() {
        // 3 is first reached at 5, then improved to 2 through 2
        let g = graph(4, &[(1, 3, 5), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        let mut traversal = FifoTraversal::new(&g, NodeId(1), NodeId(4)).unwrap();
        traversal.run();

        let node3 = g.index_of(NodeId(3)).unwrap();
        assert_eq!(2, traversal.states()[node3.index()].times_dequeued());
        assert_eq!(PathCost::Reached(3), traversal.outcome());
        assert_eq!(5, traversal.stats().relaxations);
    }

    #[test]
    fn test_step_records_relaxed_neighbors() {
        let g = graph(3, &[(1, 2, 1), (1, 3, 5)]);
        let mut traversal = FifoTraversal::new(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(1, traversal.queue().len());

        assert!(traversal.step());
        let step = traversal.last_step().unwrap();
        assert_eq!(traversal.source(), step.node());
        assert_eq!(0, step.cost());
        assert_eq!(2, step.relaxed().len());
        assert_eq!(2, traversal.queue().len());
        assert!(!traversal.arrived());

        traversal.run();
        assert!(traversal.is_finished());
        assert!(!traversal.step());
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let g = graph(3, &[(1, 3, 2), (1, 2, 4), (2, 3, -3)]);
        assert_eq!(PathCost::Reached(1), solve(&g, 1, 3));
    }

    #[test]
    fn test_identical_graphs_give_identical_results() {
        let edges = [(1, 2, 7), (2, 3, 2), (1, 3, 10), (3, 4, 1), (2, 4, 6)];
        let first = graph(4, &edges);
        let second = graph(4, &edges);
        assert_eq!(solve(&first, 1, 4), solve(&second, 1, 4));
        assert_eq!(solve(&first, 1, 4), solve(&first, 1, 4));
    }

    #[test]
    fn test_bounded_run_stops_on_negative_cycle() {
        let g = graph(3, &[(1, 2, 1), (2, 3, -2), (3, 2, 1)]);
        let mut traversal = FifoTraversal::new(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(500, traversal.run_for(500));
        assert!(!traversal.is_finished());
        assert_eq!(500, traversal.stats().dequeued);
    }

    #[test]
    fn test_bounded_run_reports_actual_steps() {
        let g = graph(3, &[(1, 2, 1), (2, 3, 1)]);
        let mut traversal = FifoTraversal::new(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(3, traversal.run_for(100));
        assert!(traversal.is_finished());
        assert_eq!(0, traversal.run_for(100));
        assert_eq!(PathCost::Reached(2), traversal.outcome());
    }

    #[test]
    fn test_unknown_endpoint() {
        let g = graph(2, &[]);
        assert!(matches!(
            FifoTraversal::new(&g, NodeId(3), NodeId(1)),
            Err(GraphError::UnknownNode(NodeId(3)))
        ));
    }
}
