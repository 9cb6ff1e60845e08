use std::hash::{Hash, Hasher};

use crate::maze::vertex::{Vertex, VertexId};

/// A directed connection between two grid cells.
///
/// Endpoints are stored as stable vertex labels rather than references, so
/// edges stay `Copy` and the vertex arena keeps single ownership. The `dx`
/// and `dy` deltas are always recomputed from the endpoint coordinates at
/// construction.
///
/// Equality and hashing cover `(from, to, dx, dy)` and deliberately exclude
/// the weight: the weight only orders Kruskal processing, and spanning-tree
/// membership checks must match edges regardless of the weight they were
/// built with. Direction matters, so an edge and its reverse are not equal.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: u32,
    /// Absolute x-distance between the endpoints.
    pub dx: u8,
    /// Absolute y-distance between the endpoints.
    pub dy: u8,
}

impl Edge {
    /// Builds the directed edge `from -> to`, deriving `dx`/`dy` from the
    /// endpoint coordinates.
    pub fn between(from: &Vertex, to: &Vertex, weight: u32) -> Self {
        Edge {
            from: from.label,
            to: to.label,
            weight,
            dx: from.x.abs_diff(to.x),
            dy: from.y.abs_diff(to.y),
        }
    }

    /// The same connection traversed the opposite way.
    pub fn reversed(&self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            weight: self.weight,
            dx: self.dx,
            dy: self.dy,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.dx == other.dx
            && self.dy == other.dy
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.dx.hash(state);
        self.dy.hash(state);
    }
}

/// Removes repeated structurally-equal edges from the list, keeping the
/// first occurrence of each. Pairwise comparison; the lists this runs on
/// hold at most four entries.
pub fn remove_duplicates(edges: &mut Vec<Edge>) {
    let mut i = 0;
    while i < edges.len() {
        let mut j = i + 1;
        while j < edges.len() {
            if edges[j] == edges[i] {
                edges.remove(j);
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}
