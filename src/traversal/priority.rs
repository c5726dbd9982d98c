use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::node::{NodeId, NodeIndex};
use crate::traversal::solver::{Cost, PathCost, PathSolver};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// Binary-heap Dijkstra with lazy deletion of stale entries.
pub struct PriorityDijkstra;

impl PathSolver for PriorityDijkstra {
    fn name(&self) -> &'static str {
        "priority"
    }

    fn solve(&self, graph: &Graph, source: NodeId, destination: NodeId) -> Result<PathCost, GraphError> {
        let src = graph.index_of(source)?;
        let dst = graph.index_of(destination)?;
        if let Some(edge) = graph.negative_edge() {
            return Err(GraphError::NegativeWeight {
                from: graph.node(edge.from()).id(),
                to: graph.node(edge.to()).id(),
                weight: edge.weight(),
            });
        }

        let mut dist: Vec<Option<Cost>> = vec![None; graph.node_count()];
        dist[src.index()] = Some(0);
        let mut pq: BinaryHeap<_> = [(Reverse(0), src.index())].into();
        let mut popped = 0usize;

        while let Some((Reverse(d_u), u)) = pq.pop() {
            if dist[u].is_some_and(|best| best < d_u) {
                continue;
            }
            popped += 1;
            if u == dst.index() {
                break;
            }
            for e_id in graph.outgoing(NodeIndex(u)) {
                let edge = graph.edge(*e_id);
                let d_new = d_u + Cost::from(edge.weight());
                let v = edge.to().index();
                if dist[v].is_none_or(|d_v| d_new < d_v) {
                    dist[v] = Some(d_new);
                    pq.push((Reverse(d_new), v));
                }
            }
        }

        debug!(%source, %destination, popped, "priority search finished");
        Ok(dist[dst.index()].map_or(PathCost::Unreachable, PathCost::Reached))
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

    #[test]
    fn test_shortest_path_through_detour() {
        let g = graph(4, &[(1, 4, 10), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        assert_eq!(
            Ok(PathCost::Reached(3)),
            PriorityDijkstra.solve(&g, NodeId(1), NodeId(4))
        );
    }

    #[test]
    fn test_unreachable_and_self() {
        let g = graph(3, &[(1, 2, 1)]);
        assert_eq!(
            Ok(PathCost::Unreachable),
            PriorityDijkstra.solve(&g, NodeId(1), NodeId(3))
        );
        assert_eq!(
            Ok(PathCost::Reached(0)),
            PriorityDijkstra.solve(&g, NodeId(3), NodeId(3))
        );
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let g = graph(3, &[(1, 2, 1), (2, 3, -1)]);
        assert_eq!(
            Err(GraphError::NegativeWeight {
                from: NodeId(2),
                to: NodeId(3),
                weight: -1
            }),
            PriorityDijkstra.solve(&g, NodeId(1), NodeId(3))
        );
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = graph(3, &[(1, 2, 0), (2, 3, 0), (1, 3, 1)]);
        assert_eq!(
            Ok(PathCost::Reached(0)),
            PriorityDijkstra.solve(&g, NodeId(1), NodeId(3))
        );
    }
}
