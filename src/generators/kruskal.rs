use crate::error::MazeError;
use crate::generators::UnionFind;
use crate::maze::{Edge, Vertex};

/// Builds a random spanning tree over the candidate edges with Kruskal's
/// algorithm.
///
/// Candidates are stable-sorted ascending by weight, so equal-weight edges
/// keep their enumeration order and the whole run is deterministic for a
/// given weight assignment. An edge `(from, to)` is accepted exactly when
/// `from` is still the root of its own component; accepting merges `from`'s
/// component into `to`'s. Every candidate is processed, the pass never
/// stops early.
///
/// Because each candidate points from a vertex to a neighbor that precedes
/// it in scan order, every vertex except the first gets accepted as an edge
/// origin exactly once, which is what makes the result a tree. The size
/// check at the end guards the (unreachable for a full grid) disconnected
/// case.
pub fn build_span(vertices: &[Vertex], edges: &[Edge]) -> Result<Vec<Edge>, MazeError> {
    let mut worklist: Vec<Edge> = edges.to_vec();
    worklist.sort_by_key(|e| e.weight);

    let mut reps = UnionFind::new(vertices.len() as u16);
    let mut span = Vec::with_capacity(vertices.len().saturating_sub(1));

    for edge in worklist {
        if reps.find(edge.from) == edge.from {
            span.push(edge);
            reps.union(edge.from, edge.to);
        }
    }

    let expected = vertices.len().saturating_sub(1);
    if span.len() != expected {
        return Err(MazeError::DisconnectedTopology {
            expected,
            actual: span.len(),
        });
    }
    tracing::debug!("spanning tree built with {} edges", span.len());
    Ok(span)
}
