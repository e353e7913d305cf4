//! Shortest-path search over configurations and the helpers built on it.

pub mod bfs;
pub mod hint;
pub mod path;
pub mod universe;
