use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::algorithms::frontier::{traverse, LifoFrontier};
use crate::config::DEFAULT_DEPTH_LIMIT;
use crate::grid::Grid;

/// Depth-first search that stops expanding at `depth_limit` steps from the
/// start. Cells at the limit are leaves; the search still explores them.
#[derive(Debug, Clone, Copy)]
pub struct DepthLimited {
    pub depth_limit: usize,
}

impl Default for DepthLimited {
    fn default() -> Self {
        DepthLimited {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

impl DepthLimited {
    pub fn new(depth_limit: usize) -> Self {
        DepthLimited { depth_limit }
    }
}

impl SearchAlgorithm for DepthLimited {
    fn name(&self) -> &'static str {
        "DLS"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        traverse(grid, LifoFrontier::with_depth_limit(self.depth_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::common::is_valid_path;
    use crate::grid::Position;

    fn open_5x5() -> Grid {
        Grid::new(5, 5, Position::new(0, 0), Position::new(4, 4)).unwrap()
    }

    #[test]
    fn test_shallow_limit_misses_target() {
        let result = DepthLimited::new(2).search(&open_5x5());
        assert!(!result.found);
        assert!(result.path.is_empty());
        // Nothing further than two steps from the start is explored.
        assert!(result
            .explored
            .iter()
            .all(|p| p.x.max(p.y) <= 2));
    }

    #[test]
    fn test_default_limit_finds_target() {
        let grid = open_5x5();
        let result = DepthLimited::default().search(&grid);
        assert!(result.found);
        assert!(is_valid_path(&grid, &result.path));
        assert_eq!(DepthLimited::default().depth_limit, 150);
    }

    #[test]
    fn test_zero_limit_only_explores_start() {
        let result = DepthLimited::new(0).search(&open_5x5());
        assert!(!result.found);
        assert_eq!(result.total_nodes_explored(), 1);
    }
}
