use rand::{SeedableRng, rngs::StdRng};

pub mod kruskal;
pub mod union_find;

pub use kruskal::build_span;
pub use union_find::UnionFind;

/// Upper bound (exclusive) for random candidate-edge weights.
pub const EDGE_WEIGHT_RANGE: u32 = 50;

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
