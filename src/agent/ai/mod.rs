// Computer opponent - tiered move selection
//
// This module implements the computer player's decision making for
// k-in-a-row on an N×N board.
//
// Key features:
// - Three tiers: Random, Greedy (one-ply win/block/center) and Minimax
// - Minimax with alpha-beta pruning and a size-dependent depth limit
// - Static line-counting evaluation for non-terminal cutoffs
// - Optional root-parallel search over rayon workers
// - Seedable random source for reproducible games

mod evaluation;
mod minimax;
mod search;
mod tier;

#[cfg(test)]
mod tests;

pub use evaluation::{evaluate, LINE_BASE};
pub use minimax::{depth_limit, WIN_SCORE};
pub use search::{SearchEngine, SearchResult};
pub use tier::Tier;
