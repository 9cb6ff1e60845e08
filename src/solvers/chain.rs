use std::collections::{HashMap, VecDeque};

use crate::maze::{Edge, Maze, VertexId};

/// Reconstructs the route from `from` to `to` along tree passages.
///
/// A spanning tree has exactly one path between any two vertices, so a
/// breadth-first sweep recording the edge that first reached each vertex,
/// followed by a walk back from `to`, recovers it. The result is ordered
/// from `from` to `to` with every edge oriented along the walk; it is empty
/// when `from == to` or (for inputs that are not spanning trees) when `to`
/// is unreachable.
pub fn shortest_chain(maze: &Maze, from: VertexId, to: VertexId) -> Vec<Edge> {
    // The sweep below only ever looks up labels it popped off the queue, so
    // a bad target would otherwise degrade silently into an empty chain.
    debug_assert!(
        maze.vertex(to).is_some(),
        "route target {to} outside the vertex arena"
    );
    if from == to {
        return Vec::new();
    }

    // Edge that first discovered each vertex.
    let mut discovered_by: HashMap<VertexId, Edge> = HashMap::new();
    let mut queue = VecDeque::from([from]);

    'sweep: while let Some(current) = queue.pop_front() {
        let Some(vertex) = maze.vertex(current) else {
            debug_assert!(false, "chain label {current} outside the vertex arena");
            continue;
        };
        for e in &vertex.out_edges {
            if e.to != from && !discovered_by.contains_key(&e.to) {
                discovered_by.insert(e.to, *e);
                if e.to == to {
                    break 'sweep;
                }
                queue.push_back(e.to);
            }
        }
    }

    let mut chain = Vec::new();
    let mut current = to;
    while current != from {
        let Some(e) = discovered_by.get(&current) else {
            return Vec::new();
        };
        chain.push(*e);
        current = e.from;
    }
    chain.reverse();
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn test_chain_of_a_corridor() {
        let maze = Maze::new(1, 5, Some(6)).unwrap();
        let chain: Vec<_> = shortest_chain(&maze, 0, 4)
            .iter()
            .map(|e| (e.from, e.to))
            .collect();
        assert_eq!(chain, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_chain_is_empty_for_equal_endpoints() {
        let maze = Maze::new(3, 3, Some(6)).unwrap();
        assert!(shortest_chain(&maze, 4, 4).is_empty());
    }

    #[test]
    fn test_chain_is_a_contiguous_simple_path() {
        let maze = Maze::new(6, 5, Some(77)).unwrap();
        let chain = shortest_chain(&maze, maze.start(), maze.goal());
        assert!(!chain.is_empty());
        assert_eq!(chain[0].from, maze.start());
        assert_eq!(chain[chain.len() - 1].to, maze.goal());
        for pair in chain.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        // Simple path: no vertex enters the chain twice.
        let mut origins: Vec<_> = chain.iter().map(|e| e.from).collect();
        origins.sort_unstable();
        origins.dedup();
        assert_eq!(origins.len(), chain.len());
        assert!(chain.len() <= maze.vertices().len() - 1);
    }

    #[test]
    fn test_chain_edges_are_legal_passages() {
        let maze = Maze::new(4, 4, Some(19)).unwrap();
        for e in shortest_chain(&maze, maze.start(), maze.goal()) {
            assert!(maze.vertex(e.from).unwrap().out_edges.contains(&e));
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside the vertex arena")]
    fn test_chain_fails_loudly_for_unknown_target() {
        let maze = Maze::new(2, 2, Some(1)).unwrap();
        shortest_chain(&maze, 0, 99);
    }

    #[test]
    fn test_chain_works_between_arbitrary_vertices() {
        let maze = Maze::new(5, 5, Some(101)).unwrap();
        let (a, b) = (3, 21);
        let chain = shortest_chain(&maze, a, b);
        assert_eq!(chain[0].from, a);
        assert_eq!(chain[chain.len() - 1].to, b);
        for pair in chain.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }
}
