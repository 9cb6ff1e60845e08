pub mod chain;
pub mod frontier;

pub use chain::shortest_chain;
pub use frontier::search;

/// Worklist discipline for the generic frontier search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// FIFO worklist: explore the maze level by level.
    BreadthFirst,
    /// LIFO worklist: follow one corridor as deep as it goes.
    DepthFirst,
}

impl std::fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOrder::BreadthFirst => write!(f, "Breadth-First Search (BFS)"),
            SearchOrder::DepthFirst => write!(f, "Depth-First Search (DFS)"),
        }
    }
}
