use crate::graph::edge::{Edge, EdgeId, Weight};
use crate::graph::error::GraphError;
use crate::graph::node::{Node, NodeId, NodeIndex};
use std::collections::HashMap;

/// How `add_edge` treats negative weights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeightPolicy {
    #[default]
    Permissive,
    RejectNegative,
}

pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adj: Vec<Vec<EdgeId>>,
    lookup: HashMap<NodeId, NodeIndex>,
    policy: WeightPolicy,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_policy(WeightPolicy::default())
    }

    pub fn with_policy(policy: WeightPolicy) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            adj: Vec::new(),
            lookup: HashMap::new(),
            policy,
        }
    }

    /// Graph holding nodes `1..=count` and no edges.
    #[cfg(test)]
    pub fn with_nodes(count: u32, policy: WeightPolicy) -> Self {
        let mut graph = Self::with_policy(policy);
        (1..=count).for_each(|id| {
            graph.push_node(NodeId(id));
        });
        graph
    }

    pub fn add_node(&mut self, id: NodeId) -> Result<NodeIndex, GraphError> {
        if self.lookup.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        Ok(self.push_node(id))
    }

    fn push_node(&mut self, id: NodeId) -> NodeIndex {
        let index = NodeIndex(self.nodes.len());
        self.nodes.push(Node::new(id));
        self.adj.push(Vec::new());
        self.lookup.insert(id, index);
        index
    }

    /// Sets the directed edge `from -> to`. An existing edge between the same
    /// pair keeps its position in the adjacency list and takes the new weight.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<EdgeId, GraphError> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;
        if weight < 0 && self.policy == WeightPolicy::RejectNegative {
            return Err(GraphError::NegativeWeight { from, to, weight });
        }

        let existing = self.adj[from_index.index()]
            .iter()
            .copied()
            .find(|e_id| self.edges[e_id.index()].to() == to_index);
        if let Some(e_id) = existing {
            self.edges[e_id.index()].set_weight(weight);
            return Ok(e_id);
        }

        let e_id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(from_index, to_index, weight));
        self.adj[from_index.index()].push(e_id);
        Ok(e_id)
    }

    pub fn index_of(&self, id: NodeId) -> Result<NodeIndex, GraphError> {
        self.lookup
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownNode(id))
    }

    #[cfg(test)]
    pub fn contains(&self, id: NodeId) -> bool {
        self.lookup.contains_key(&id)
    }

    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.index()]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn outgoing(&self, index: NodeIndex) -> &[EdgeId] {
        &self.adj[index.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn negative_edge(&self) -> Option<&Edge> {
        self.edges.iter().find(|e| e.weight() < 0)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
