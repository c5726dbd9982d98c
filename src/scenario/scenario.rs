use crate::graph::edge::Weight;
use crate::graph::error::GraphError;
use crate::graph::graph::{Graph, WeightPolicy};
use crate::graph::node::NodeId;
use crate::scenario::reader::InputError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    pub source: NodeId,
    pub destination: NodeId,
}

/// One graph and the single query asked of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    node_count: u32,
    edges: Vec<EdgeSpec>,
    query: Query,
}

impl TestCase {
    pub fn new(node_count: u32, edges: Vec<EdgeSpec>, query: Query) -> Self {
        Self {
            node_count,
            edges,
            query,
        }
    }

    #[cfg(test)]
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    #[cfg(test)]
    pub fn edges(&self) -> &[EdgeSpec] {
        &self.edges
    }

    pub fn query(&self) -> Query {
        self.query
    }

    /// Nodes `1..=node_count`, then every edge in input order.
    pub fn build_graph(&self, policy: WeightPolicy) -> Result<Graph, GraphError> {
        let mut graph = Graph::with_policy(policy);
        for id in 1..=self.node_count {
            graph.add_node(NodeId(id))?;
        }
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}

/// Writes the case in the line format the reader accepts.
impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.node_count, self.edges.len())?;
        for edge in &self.edges {
            writeln!(f, "{} {} {}", edge.from, edge.to, edge.weight)?;
        }
        writeln!(f, "{} {}", self.query.source, self.query.destination)
    }
}

/// Anything that yields test cases until the stream ends.
pub trait CaseSource {
    fn next_case(&mut self) -> Result<Option<TestCase>, InputError>;
}
