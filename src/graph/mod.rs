pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
