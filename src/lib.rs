//! Random perfect-maze generation over a rectangular grid graph.
//!
//! The pipeline builds the grid's candidate edges with random weights, runs
//! Kruskal's algorithm over a union-find to pick a spanning tree, derives
//! per-vertex adjacency (the maze's passages) from tree membership, and
//! offers breadth-first/depth-first frontier search plus reconstruction of
//! the start-to-goal route.

pub mod display;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use maze::{Direction, Edge, Maze, Vertex, VertexId, Walls};
pub use solvers::SearchOrder;
