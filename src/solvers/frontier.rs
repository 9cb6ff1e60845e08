use std::collections::{HashSet, VecDeque};

use crate::maze::{Edge, Maze, VertexId};
use crate::solvers::SearchOrder;

/// One deque, two disciplines. Items always leave at the head; breadth-first
/// enqueues at the tail, depth-first pushes at the head.
struct Worklist {
    items: VecDeque<VertexId>,
    order: SearchOrder,
}

impl Worklist {
    fn new(order: SearchOrder) -> Self {
        Worklist {
            items: VecDeque::new(),
            order,
        }
    }

    fn push(&mut self, label: VertexId) {
        match self.order {
            SearchOrder::BreadthFirst => self.items.push_back(label),
            SearchOrder::DepthFirst => self.items.push_front(label),
        }
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.items.pop_front()
    }
}

/// Explores the derived adjacency from `from` until `to` is taken off the
/// worklist, and returns every edge touched along the way, in discovery
/// order.
///
/// The result is an edge-visitation trace, not a path: it records the order
/// neighbors were discovered under the chosen discipline, which is exactly
/// what replay consumers (e.g. a visited-cell highlight) rely on. Each
/// vertex is expanded at most once, so the run is bounded by the size of
/// the graph.
pub fn search(maze: &Maze, from: VertexId, to: VertexId, order: SearchOrder) -> Vec<Edge> {
    let mut trace = Vec::new();
    let mut already_seen: HashSet<VertexId> = HashSet::new();
    let mut worklist = Worklist::new(order);
    worklist.push(from);

    while let Some(next) = worklist.pop() {
        if next == to {
            break;
        }
        if already_seen.contains(&next) {
            continue;
        }
        let Some(vertex) = maze.vertex(next) else {
            // Worklist labels come from the maze's own edges; anything else
            // is a caller bug, not a reason to index out of range.
            debug_assert!(false, "worklist label {next} outside the vertex arena");
            continue;
        };
        for e in &vertex.out_edges {
            trace.push(*e);
            worklist.push(e.to);
        }
        already_seen.insert(next);
    }
    tracing::debug!(
        "{order} from {from} to {to}: traced {} edges, expanded {} vertices",
        trace.len(),
        already_seen.len(),
    );
    trace
}
