/// Errors surfaced by maze construction and coordinate lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Width or height was zero. Rejected before any allocation happens.
    #[error("invalid maze dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimension { width: u8, height: u8 },
    /// A coordinate-to-vertex lookup missed the grid.
    #[error("no vertex at ({x}, {y})")]
    VertexNotFound { x: u8, y: u8 },
    /// The spanning tree came out short of covering every vertex.
    /// Unreachable for a full rectangular grid, checked defensively anyway.
    #[error("spanning tree has {actual} edges, expected {expected}")]
    DisconnectedTopology { expected: usize, actual: usize },
}
