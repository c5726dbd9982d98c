pub mod basic;
pub mod random;
pub mod reader;
pub mod runner;
pub mod scenario;
