use crate::algorithms::common::{finish_found, ParentMap, SearchAlgorithm, SearchResult};
use crate::config::default_max_depth;
use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;

/// Iterative deepening depth-first search.
///
/// Runs a depth-limited DFS for limits 0, 1, 2, ... up to `max_depth`
/// (default: twice the larger grid side). Explored and parent state is reset
/// for every limit; the reported explored set is the union over all limits.
/// Within one limit a cell is entered at most once, the first time any branch
/// reaches it, and neighbors are tried in grid order.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeDeepening {
    pub max_depth: Option<usize>,
}

/// One level of the simulated recursion.
struct Frame {
    pos: Position,
    depth: usize,
    neighbors: Vec<Position>,
    next: usize,
}

enum LimitOutcome {
    Found,
    /// Some cell sat exactly at the limit, so a deeper limit may do better.
    CutOff,
    Exhausted,
}

impl IterativeDeepening {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        IterativeDeepening {
            max_depth: Some(max_depth),
        }
    }

    fn frame(grid: &Grid, pos: Position, depth: usize, limit: usize) -> Frame {
        let neighbors = if depth < limit {
            grid.neighbors(&pos)
        } else {
            Vec::new()
        };
        Frame {
            pos,
            depth,
            neighbors,
            next: 0,
        }
    }

    /// Depth-limited DFS from the start with an explicit frame stack. Visits
    /// cells in the same order as the recursive formulation.
    fn search_limit(
        grid: &Grid,
        limit: usize,
        explored: &mut FxHashSet<Position>,
        parents: &mut ParentMap,
        boundary: &mut FxHashSet<Position>,
    ) -> LimitOutcome {
        let mut cut_off = false;

        parents.insert(grid.start, None);
        explored.insert(grid.start);
        if grid.start == grid.target {
            return LimitOutcome::Found;
        }
        if limit == 0 {
            boundary.insert(grid.start);
            cut_off = true;
        }

        let mut stack = vec![Self::frame(grid, grid.start, 0, limit)];
        while let Some(top) = stack.last_mut() {
            if top.next == top.neighbors.len() {
                stack.pop();
                continue;
            }
            let neighbor = top.neighbors[top.next];
            top.next += 1;

            if explored.contains(&neighbor) {
                continue;
            }
            let (parent, depth) = (top.pos, top.depth + 1);

            parents.insert(neighbor, Some(parent));
            explored.insert(neighbor);
            if neighbor == grid.target {
                return LimitOutcome::Found;
            }
            if depth >= limit {
                boundary.insert(neighbor);
                cut_off = true;
            }
            stack.push(Self::frame(grid, neighbor, depth, limit));
        }

        if cut_off {
            LimitOutcome::CutOff
        } else {
            LimitOutcome::Exhausted
        }
    }
}

impl SearchAlgorithm for IterativeDeepening {
    fn name(&self) -> &'static str {
        "IDDFS"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        let max_depth = self.max_depth.unwrap_or_else(|| default_max_depth(grid));
        let mut all_explored = FxHashSet::default();
        let mut frontier_history = Vec::new();

        for limit in 0..=max_depth {
            let mut explored = FxHashSet::default();
            let mut parents = ParentMap::default();
            let mut boundary = FxHashSet::default();

            let outcome =
                Self::search_limit(grid, limit, &mut explored, &mut parents, &mut boundary);
            log::trace!(
                "IDDFS limit {}: {} cells explored, {} at the boundary",
                limit,
                explored.len(),
                boundary.len()
            );
            frontier_history.push(boundary);

            match outcome {
                LimitOutcome::Found => {
                    all_explored.extend(explored);
                    return finish_found(grid, &parents, all_explored, frontier_history);
                }
                LimitOutcome::CutOff => all_explored.extend(explored),
                LimitOutcome::Exhausted => {
                    // The limit was never reached, so deeper limits would
                    // repeat this traversal exactly.
                    all_explored.extend(explored);
                    break;
                }
            }
        }

        SearchResult::not_found(grid, all_explored, frontier_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::common::{is_valid_path, reconstruct_path};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Straightforward recursive depth-limited DFS used as a reference.
    fn recursive_visit(
        grid: &Grid,
        node: Position,
        depth: usize,
        limit: usize,
        explored: &mut FxHashSet<Position>,
        parents: &mut ParentMap,
    ) -> Option<Vec<Position>> {
        if !explored.insert(node) {
            return None;
        }
        if node == grid.target {
            return reconstruct_path(parents, node);
        }
        if depth < limit {
            for neighbor in grid.neighbors(&node) {
                if !explored.contains(&neighbor) {
                    parents.insert(neighbor, Some(node));
                    if let Some(path) =
                        recursive_visit(grid, neighbor, depth + 1, limit, explored, parents)
                    {
                        return Some(path);
                    }
                }
            }
        }
        None
    }

    fn recursive_iddfs(grid: &Grid, max_depth: usize) -> (Option<Vec<Position>>, FxHashSet<Position>) {
        let mut all_explored = FxHashSet::default();
        for limit in 0..=max_depth {
            let mut explored = FxHashSet::default();
            let mut parents = ParentMap::default();
            parents.insert(grid.start, None);
            let path = recursive_visit(grid, grid.start, 0, limit, &mut explored, &mut parents);
            all_explored.extend(explored);
            if path.is_some() {
                return (path, all_explored);
            }
        }
        (None, all_explored)
    }

    #[test]
    fn test_matches_recursive_formulation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut grid = Grid::new(9, 7, Position::new(0, 3), Position::new(8, 3)).unwrap();
            let walls = rng.gen_range(5..25);
            grid.add_walls_randomly(walls, &mut rng);

            let max_depth = default_max_depth(&grid);
            let (expected_path, expected_explored) = recursive_iddfs(&grid, max_depth);
            let result = IterativeDeepening::new().search(&grid);

            assert_eq!(result.found, expected_path.is_some());
            assert_eq!(result.path, expected_path.unwrap_or_default());
            assert_eq!(result.explored, expected_explored);
        }
    }

    #[test]
    fn test_open_grid() {
        let grid = Grid::new(5, 5, Position::new(0, 0), Position::new(4, 4)).unwrap();
        let result = IterativeDeepening::new().search(&grid);
        assert!(result.found);
        assert!(is_valid_path(&grid, &result.path));
        assert!(!result.frontier_history.is_empty());
    }

    #[test]
    fn test_ceiling_below_distance_fails() {
        let grid = Grid::new(10, 1, Position::new(0, 0), Position::new(9, 0)).unwrap();
        let result = IterativeDeepening::with_max_depth(5).search(&grid);
        assert!(!result.found);
        assert_eq!(result.frontier_history.len(), 6);

        let result = IterativeDeepening::with_max_depth(9).search(&grid);
        assert!(result.found);
        assert_eq!(result.path.len(), 10);
    }

    #[test]
    fn test_unreachable_stops_early() {
        let mut grid = Grid::new(6, 6, Position::new(0, 0), Position::new(5, 5)).unwrap();
        grid.add_static_obstacle(1, 0);
        grid.add_static_obstacle(0, 1);
        grid.add_static_obstacle(1, 1);
        let result = IterativeDeepening::new().search(&grid);

        assert!(!result.found);
        assert_eq!(result.total_nodes_explored(), 1);
        assert_eq!(result.frontier_history.len(), 2);
    }
}
