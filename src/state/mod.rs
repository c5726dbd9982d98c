pub mod node_state;
