pub mod edge;
pub mod vertex;

pub use edge::{Edge, remove_duplicates};
pub use vertex::{Vertex, VertexId, Walls};

use rand::Rng;

use crate::error::MazeError;
use crate::generators::{self, EDGE_WEIGHT_RANGE};
use crate::solvers;

/// The four moves available from a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Coordinate one step in this direction from `(x, y)`, or `None` when
    /// the step would leave a `width` x `height` grid.
    pub fn step_from(self, x: u8, y: u8, width: u8, height: u8) -> Option<(u8, u8)> {
        match self {
            Direction::Left => (x > 0).then(|| (x - 1, y)),
            Direction::Right => (x.saturating_add(1) < width).then(|| (x + 1, y)),
            Direction::Up => (y > 0).then(|| (x, y - 1)),
            Direction::Down => (y.saturating_add(1) < height).then(|| (x, y + 1)),
        }
    }
}

/// A randomly generated perfect maze over a rectangular grid.
///
/// Construction runs the whole pipeline in order: vertex enumeration,
/// candidate-edge enumeration with random weights, Kruskal spanning-tree
/// construction, wall carving plus adjacency derivation, and reconstruction
/// of the start-to-goal route. Later stages only read what earlier stages
/// wrote; the only nondeterminism is the (seedable) weight RNG.
#[derive(Debug)]
pub struct Maze {
    width: u8,
    height: u8,
    vertices: Vec<Vertex>,
    /// Full candidate edge set, one direction per unordered neighbor pair.
    edges: Vec<Edge>,
    /// Spanning-tree edges in acceptance order. Walls are carved in exactly
    /// this order, which is the order animation layers replay.
    span: Vec<Edge>,
    /// The unique tree route from the start vertex to the goal vertex.
    path: Vec<Edge>,
}

impl Maze {
    /// Generates a maze. `seed` makes the weight assignment (and therefore
    /// the whole maze) reproducible; without it the RNG is OS-seeded.
    pub fn new(width: u8, height: u8, seed: Option<u64>) -> Result<Self, MazeError> {
        Self::with_rng(width, height, &mut generators::get_rng(seed))
    }

    /// Generates a maze drawing edge weights from the caller's RNG. This is
    /// the seam reproducible fixtures use: a fully deterministic weight
    /// source pins the exact tree the pipeline produces.
    pub fn with_rng(width: u8, height: u8, rng: &mut impl Rng) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let mut maze = Maze {
            width,
            height,
            vertices: Vec::new(),
            edges: Vec::new(),
            span: Vec::new(),
            path: Vec::new(),
        };
        maze.gen_vertices();
        maze.gen_edges(rng);
        maze.span = generators::build_span(&maze.vertices, &maze.edges)?;
        maze.carve_passages();
        maze.derive_adjacency()?;
        maze.path = solvers::shortest_chain(&maze, maze.start(), maze.goal());
        tracing::info!(
            "generated {}x{} maze: {} candidate edges, {} tree edges, route of {} moves",
            width,
            height,
            maze.edges.len(),
            maze.span.len(),
            maze.path.len(),
        );
        Ok(maze)
    }

    /// Enumerates the vertex arena in scan order: outer loop over x, inner
    /// loop over y, labels counting up from 0.
    fn gen_vertices(&mut self) {
        let mut label: VertexId = 0;
        for x in 0..self.width {
            for y in 0..self.height {
                self.vertices.push(Vertex::new(label, x, y));
                label += 1;
            }
        }
    }

    /// Enumerates the candidate edges: for every vertex, an edge to its left
    /// neighbor and one to its top neighbor, each independently weighted.
    /// One direction per unordered pair suffices, the topology is undirected.
    fn gen_edges(&mut self, rng: &mut impl Rng) {
        for i in 0..self.vertices.len() {
            let v = &self.vertices[i];
            let mut candidates = Vec::with_capacity(2);
            if v.x > 0 {
                candidates.push((v.x - 1, v.y));
            }
            if v.y > 0 {
                candidates.push((v.x, v.y - 1));
            }
            for (nx, ny) in candidates {
                // Neighbor coordinates are in bounds by construction.
                let neighbor = &self.vertices[self.raw_index(nx, ny)];
                let weight = rng.random_range(0..EDGE_WEIGHT_RANGE);
                let e = Edge::between(&self.vertices[i], neighbor, weight);
                self.edges.push(e);
            }
        }
    }

    /// Opens the walls on both endpoints of every spanning-tree edge, in
    /// tree acceptance order.
    fn carve_passages(&mut self) {
        for i in 0..self.span.len() {
            let edge = self.span[i];
            self.open_walls(edge);
        }
    }

    /// Clears the pair of wall flags separating the endpoints of `edge`.
    fn open_walls(&mut self, edge: Edge) {
        let (x1, y1) = {
            let v = &self.vertices[edge.from as usize];
            (v.x, v.y)
        };
        let (x2, y2) = {
            let v = &self.vertices[edge.to as usize];
            (v.x, v.y)
        };
        let (from, to) = (edge.from as usize, edge.to as usize);
        if x1 > x2 {
            self.vertices[from].walls.left = false;
            self.vertices[to].walls.right = false;
        }
        if x1 < x2 {
            self.vertices[from].walls.right = false;
            self.vertices[to].walls.left = false;
        }
        if y1 > y2 {
            self.vertices[from].walls.top = false;
            self.vertices[to].walls.bottom = false;
        }
        if y1 < y2 {
            self.vertices[from].walls.bottom = false;
            self.vertices[to].walls.top = false;
        }
    }

    /// Populates every vertex's out-edge list from spanning-tree membership:
    /// for each of the up-to-4 grid neighbors, the candidate edge (in either
    /// direction) must appear in the tree for the passage to exist.
    /// Replaces the lists wholesale, so running it again changes nothing.
    fn derive_adjacency(&mut self) -> Result<(), MazeError> {
        for i in 0..self.vertices.len() {
            let out = {
                let v = &self.vertices[i];
                let mut out = Vec::with_capacity(4);
                for dir in Direction::ALL {
                    let Some((nx, ny)) = dir.step_from(v.x, v.y, self.width, self.height) else {
                        continue;
                    };
                    let neighbor = &self.vertices[self.index_of(nx, ny)? as usize];
                    let e = Edge::between(v, neighbor, 0);
                    if self.span.contains(&e) || self.span.contains(&e.reversed()) {
                        out.push(e);
                    }
                }
                remove_duplicates(&mut out);
                out
            };
            self.vertices[i].out_edges = out;
        }
        Ok(())
    }

    /// Maps grid coordinates to the vertex label at that cell.
    pub fn index_of(&self, x: u8, y: u8) -> Result<VertexId, MazeError> {
        if x < self.width && y < self.height {
            Ok(self.raw_index(x, y) as VertexId)
        } else {
            Err(MazeError::VertexNotFound { x, y })
        }
    }

    fn raw_index(&self, x: u8, y: u8) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Validates a directional move: returns the destination label iff the
    /// corresponding passage exists in `from`'s out-edge list. Off-grid
    /// moves, walled moves, and unknown labels all yield `None`.
    pub fn step(&self, from: VertexId, direction: Direction) -> Option<VertexId> {
        let v = self.vertices.get(from as usize)?;
        let (nx, ny) = direction.step_from(v.x, v.y, self.width, self.height)?;
        let n_idx = self.index_of(nx, ny).ok()?;
        let candidate = Edge::between(v, &self.vertices[n_idx as usize], 0);
        v.out_edges.contains(&candidate).then_some(n_idx)
    }

    /// Runs a frontier search from start to goal under the given discipline
    /// and returns the edge-visitation trace.
    pub fn solve(&self, order: solvers::SearchOrder) -> Vec<Edge> {
        solvers::search(self, self.start(), self.goal(), order)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The designated entry vertex (first in scan order).
    pub fn start(&self) -> VertexId {
        0
    }

    /// The designated exit vertex (last in scan order).
    pub fn goal(&self) -> VertexId {
        (self.vertices.len() - 1) as VertexId
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, label: VertexId) -> Option<&Vertex> {
        self.vertices.get(label as usize)
    }

    /// The full candidate edge set, in enumeration order.
    pub fn candidate_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Spanning-tree edges in acceptance order (also the wall-carving order).
    pub fn span(&self) -> &[Edge] {
        &self.span
    }

    /// The start-to-goal route along tree edges.
    pub fn solution(&self) -> &[Edge] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::RngCore;

    use super::*;

    /// Walks the derived adjacency from the start and returns the labels it
    /// can reach.
    fn reachable(maze: &Maze) -> HashSet<VertexId> {
        let mut seen = HashSet::from([maze.start()]);
        let mut stack = vec![maze.start()];
        while let Some(label) = stack.pop() {
            for e in &maze.vertex(label).unwrap().out_edges {
                if seen.insert(e.to) {
                    stack.push(e.to);
                }
            }
        }
        seen
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            Maze::new(0, 4, Some(1)).unwrap_err(),
            MazeError::InvalidDimension { width: 0, height: 4 }
        );
        assert_eq!(
            Maze::new(4, 0, Some(1)).unwrap_err(),
            MazeError::InvalidDimension { width: 4, height: 0 }
        );
    }

    #[test]
    fn test_vertex_enumeration_is_column_major() {
        let maze = Maze::new(2, 2, Some(7)).unwrap();
        let coords: Vec<_> = maze.vertices().iter().map(|v| (v.label, v.x, v.y)).collect();
        assert_eq!(coords, vec![(0, 0, 0), (1, 0, 1), (2, 1, 0), (3, 1, 1)]);
    }

    #[test]
    fn test_candidate_edge_count_matches_grid_topology() {
        for (w, h) in [(1u8, 1u8), (1, 6), (5, 1), (4, 3), (7, 7)] {
            let maze = Maze::new(w, h, Some(11)).unwrap();
            let expected = w as usize * (h as usize - 1) + (w as usize - 1) * h as usize;
            assert_eq!(maze.candidate_edges().len(), expected, "{w}x{h}");
        }
    }

    #[test]
    fn test_span_is_a_spanning_tree() {
        for (w, h) in [(1u8, 1u8), (1, 5), (4, 3), (8, 8)] {
            let maze = Maze::new(w, h, Some(42)).unwrap();
            let v = w as usize * h as usize;
            // |V| - 1 edges plus full reachability makes the span a tree:
            // connected and, by edge count, necessarily acyclic.
            assert_eq!(maze.span().len(), v - 1, "{w}x{h}");
            assert_eq!(reachable(&maze).len(), v, "{w}x{h}");
        }
    }

    #[test]
    fn test_two_by_two_scenario() {
        let maze = Maze::new(2, 2, Some(3)).unwrap();
        assert_eq!(maze.vertices().len(), 4);
        assert_eq!(maze.candidate_edges().len(), 4);
        assert_eq!(maze.span().len(), 3);
        // Three passages, each clearing one wall flag on both endpoints.
        let cleared: usize = maze
            .vertices()
            .iter()
            .map(|v| 4 - v.walls.closed_count())
            .sum();
        assert_eq!(cleared, 6);
    }

    /// Weight source that hands out a steeply descending sequence of raw
    /// values. Uniform integer sampling maps larger raw draws to larger
    /// results, so the candidate weights come out strictly decreasing in
    /// enumeration order no matter how many raw draws one weight consumes.
    struct DescendingRng {
        next: u32,
    }

    impl RngCore for DescendingRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.next;
            self.next = self.next.wrapping_sub(500_000_000);
            value
        }

        fn next_u64(&mut self) -> u64 {
            let lo = self.next_u32() as u64;
            let hi = self.next_u32() as u64;
            (hi << 32) | lo
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn test_known_weight_sequence_pins_the_exact_tree() {
        // 2x2 fixture with a known weight source. Candidates enumerate as
        // 1->0, 2->0, 3->1, 3->2 with descending weights, so Kruskal
        // processes them in reverse: 3->2 accepted, 3->1 rejected (3 is no
        // longer a root), then 2->0 and 1->0. Any drift in enumeration
        // order, sort direction, or the acceptance rule breaks these lists.
        let mut rng = DescendingRng {
            next: 4_250_000_000,
        };
        let maze = Maze::with_rng(2, 2, &mut rng).unwrap();

        let span: Vec<_> = maze.span().iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(span, vec![(3, 2), (2, 0), (1, 0)]);

        let adjacency: Vec<Vec<_>> = maze
            .vertices()
            .iter()
            .map(|v| v.out_edges.iter().map(|e| (e.from, e.to)).collect())
            .collect();
        assert_eq!(
            adjacency,
            vec![
                vec![(0, 2), (0, 1)],
                vec![(1, 0)],
                vec![(2, 0), (2, 3)],
                vec![(3, 2)],
            ]
        );

        let route: Vec<_> = maze.solution().iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(route, vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn test_same_seed_reproduces_the_maze() {
        let a = Maze::new(6, 5, Some(1234)).unwrap();
        let b = Maze::new(6, 5, Some(1234)).unwrap();
        assert_eq!(a.span(), b.span());
        assert_eq!(a.solution(), b.solution());
        for (va, vb) in a.vertices().iter().zip(b.vertices()) {
            assert_eq!(va.out_edges, vb.out_edges);
            assert_eq!(va.walls, vb.walls);
        }
    }

    #[test]
    fn test_adjacency_derivation_is_idempotent() {
        let mut maze = Maze::new(5, 4, Some(99)).unwrap();
        let before: Vec<Vec<Edge>> =
            maze.vertices().iter().map(|v| v.out_edges.clone()).collect();
        maze.derive_adjacency().unwrap();
        let after: Vec<Vec<Edge>> =
            maze.vertices().iter().map(|v| v.out_edges.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_adjacency_agrees_with_wall_flags() {
        let maze = Maze::new(4, 4, Some(5)).unwrap();
        for v in maze.vertices() {
            for dir in Direction::ALL {
                let open = match dir {
                    Direction::Left => !v.walls.left,
                    Direction::Right => !v.walls.right,
                    Direction::Up => !v.walls.top,
                    Direction::Down => !v.walls.bottom,
                };
                assert_eq!(
                    maze.step(v.label, dir).is_some(),
                    open,
                    "vertex {} direction {:?}",
                    v.label,
                    dir
                );
            }
        }
    }

    #[test]
    fn test_step_rejects_off_grid_and_unknown_labels() {
        let maze = Maze::new(1, 1, Some(0)).unwrap();
        for dir in Direction::ALL {
            assert_eq!(maze.step(0, dir), None);
        }
        assert_eq!(maze.step(77, Direction::Down), None);
    }

    #[test]
    fn test_index_of_bounds() {
        let maze = Maze::new(3, 2, Some(8)).unwrap();
        assert_eq!(maze.index_of(2, 1).unwrap(), 5);
        assert_eq!(
            maze.index_of(3, 0).unwrap_err(),
            MazeError::VertexNotFound { x: 3, y: 0 }
        );
        assert_eq!(
            maze.index_of(0, 2).unwrap_err(),
            MazeError::VertexNotFound { x: 0, y: 2 }
        );
    }

    #[test]
    fn test_corridor_has_unique_route() {
        // A 1xN maze has exactly one possible topology.
        let maze = Maze::new(1, 5, Some(21)).unwrap();
        let route: Vec<_> = maze.solution().iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(route, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }
}
