use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::algorithms::frontier::{traverse, PriorityFrontier};
use crate::grid::Grid;

/// Uniform-cost search. Every step costs 1; ties pop in push order.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformCost;

impl UniformCost {
    pub fn new() -> Self {
        UniformCost
    }
}

impl SearchAlgorithm for UniformCost {
    fn name(&self) -> &'static str {
        "UCS"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        traverse(grid, PriorityFrontier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::Bfs;
    use crate::algorithms::common::is_valid_path;
    use crate::grid::Position;

    #[test]
    fn test_matches_bfs_path_length() {
        let mut grid = Grid::new(8, 8, Position::new(0, 0), Position::new(7, 5)).unwrap();
        for y in 0..7 {
            grid.add_static_obstacle(4, y);
        }
        let ucs = UniformCost::new().search(&grid);
        let bfs = Bfs::new().search(&grid);

        assert!(ucs.found);
        assert!(is_valid_path(&grid, &ucs.path));
        assert_eq!(ucs.path.len(), bfs.path.len());
    }

    #[test]
    fn test_same_expansion_order_as_bfs_on_unit_costs() {
        let grid = Grid::new(6, 6, Position::new(1, 1), Position::new(5, 2)).unwrap();
        let ucs = UniformCost::new().search(&grid);
        let bfs = Bfs::new().search(&grid);

        assert_eq!(ucs.path, bfs.path);
        assert_eq!(ucs.explored, bfs.explored);
    }
}
