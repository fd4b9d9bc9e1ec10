use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::algorithms::frontier::{traverse, LifoFrontier};
use crate::grid::Grid;

/// Depth-first search over an explicit stack. Siblings are pushed in reverse
/// neighbor order so they are expanded in neighbor order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dfs;

impl Dfs {
    pub fn new() -> Self {
        Dfs
    }
}

impl SearchAlgorithm for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        traverse(grid, LifoFrontier::new())
    }
}
