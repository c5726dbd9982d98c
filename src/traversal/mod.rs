pub mod engine;
pub mod priority;
pub mod solver;
