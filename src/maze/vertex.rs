use std::hash::{Hash, Hasher};

use crate::maze::edge::Edge;

/// Stable arena index of a vertex. Labels are assigned in scan order at
/// generation time and double as indices into the maze's vertex list.
pub type VertexId = u16;

/// The four wall flags of a grid cell. All walls start closed; passages are
/// opened as spanning-tree edges are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Walls {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }
}

impl Walls {
    /// Number of walls still closed around this cell.
    pub fn closed_count(&self) -> usize {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .filter(|&&w| w)
            .count()
    }
}

/// A grid cell of the maze.
///
/// Identity is `(label, x, y)` and nothing else: wall state and the derived
/// out-edge list never participate in equality or hashing, so a vertex keeps
/// its identity as the pipeline mutates it.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub label: VertexId,
    pub x: u8,
    pub y: u8,
    pub walls: Walls,
    /// Traversable edges out of this vertex. Empty until adjacency is
    /// derived from the spanning tree.
    pub out_edges: Vec<Edge>,
}

impl Vertex {
    pub fn new(label: VertexId, x: u8, y: u8) -> Self {
        Vertex {
            label,
            x,
            y,
            walls: Walls::default(),
            out_edges: Vec::new(),
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.x == other.x && self.y == other.y
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
        self.x.hash(state);
        self.y.hash(state);
    }
}
