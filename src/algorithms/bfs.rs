use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::algorithms::frontier::{traverse, FifoFrontier};
use crate::grid::Grid;

/// Breadth-first search. Cells are expanded in non-decreasing step count, so
/// the first path to the target has the fewest cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl SearchAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        traverse(grid, FifoFrontier::default())
    }
}
