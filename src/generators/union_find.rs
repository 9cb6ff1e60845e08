use crate::maze::VertexId;

/// Disjoint-set forest over vertex labels.
///
/// `find` walks the representative chain to its fixed point and compresses
/// the path on the way back; a single map lookup is not transitively correct
/// once a component has been merged through intermediate vertices.
///
/// `union` is directional: it always merges `a`'s component into `b`'s, so
/// `a`'s old root stops being a root. Kruskal's acceptance rule relies on
/// that direction, which is why there is no union-by-rank here.
pub struct UnionFind {
    parent: Vec<VertexId>,
}

impl UnionFind {
    /// Creates a forest where every label in `0..size` is its own
    /// representative.
    pub fn new(size: u16) -> Self {
        UnionFind {
            parent: (0..size).collect(),
        }
    }

    /// Returns the representative of `x`'s component.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.find(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    /// Merges `a`'s component into `b`'s. Returns `false` if the two were
    /// already in the same component.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a as usize] = root_b;
        true
    }

    /// Whether `a` and `b` currently share a representative.
    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }
}
