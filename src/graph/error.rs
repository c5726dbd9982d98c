use crate::graph::edge::Weight;
use crate::graph::node::NodeId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} already exists")]
    DuplicateNode(NodeId),
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
}
