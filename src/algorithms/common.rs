use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};

/// Parent links recorded during a run. The start cell maps to `None`.
pub type ParentMap = FxHashMap<Position, Option<Position>>;

/// Everything a strategy reports about one run.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub found: bool,
    /// Start to target inclusive; empty when nothing was found.
    pub path: Vec<Position>,
    pub explored: FxHashSet<Position>,
    /// Frontier contents captured once per expansion step, for replay.
    pub frontier_history: Vec<FxHashSet<Position>>,
    pub transient_obstacles_encountered: Vec<Position>,
}

impl SearchResult {
    pub fn found(
        grid: &Grid,
        path: Vec<Position>,
        explored: FxHashSet<Position>,
        frontier_history: Vec<FxHashSet<Position>>,
    ) -> Self {
        let transient_obstacles_encountered = grid.transient_obstacles_near(&explored);
        SearchResult {
            found: true,
            path,
            explored,
            frontier_history,
            transient_obstacles_encountered,
        }
    }

    pub fn not_found(
        grid: &Grid,
        explored: FxHashSet<Position>,
        frontier_history: Vec<FxHashSet<Position>>,
    ) -> Self {
        let transient_obstacles_encountered = grid.transient_obstacles_near(&explored);
        SearchResult {
            found: false,
            path: Vec::new(),
            explored,
            frontier_history,
            transient_obstacles_encountered,
        }
    }

    pub fn total_nodes_explored(&self) -> usize {
        self.explored.len()
    }

    /// Number of cells on the path, endpoints included.
    pub fn path_length(&self) -> usize {
        self.path.len()
    }
}

/// A search strategy over a `Grid`.
///
/// Implementations keep no state between calls: all bookkeeping for a run is
/// created inside `search` and dropped when it returns, so one value can be
/// reused and shared across threads.
pub trait SearchAlgorithm: Send + Sync {
    fn name(&self) -> &'static str;

    fn search(&self, grid: &Grid) -> SearchResult;
}

/// Walks parent links back from `node` to the start and returns the cells in
/// start-to-`node` order. Returns `None` if a link is missing.
pub fn reconstruct_path(parents: &ParentMap, node: Position) -> Option<Vec<Position>> {
    let mut path = Vec::new();
    let mut current = Some(node);
    while let Some(pos) = current {
        path.push(pos);
        current = *parents.get(&pos)?;
    }
    path.reverse();
    Some(path)
}

/// Builds the final result once the target has been explored.
pub(crate) fn finish_found(
    grid: &Grid,
    parents: &ParentMap,
    explored: FxHashSet<Position>,
    frontier_history: Vec<FxHashSet<Position>>,
) -> SearchResult {
    match reconstruct_path(parents, grid.target) {
        Some(path) => SearchResult::found(grid, path, explored, frontier_history),
        None => {
            log::error!("target {} reached without a parent chain", grid.target);
            SearchResult::not_found(grid, explored, frontier_history)
        }
    }
}

/// True when `path` runs from start to target through unblocked cells, each
/// step moving to a neighbor under the grid's neighbor rule.
pub fn is_valid_path(grid: &Grid, path: &[Position]) -> bool {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return false;
    };
    if *first != grid.start || *last != grid.target {
        return false;
    }
    if path.iter().any(|pos| grid.is_blocked(pos)) {
        return false;
    }
    path.windows(2)
        .all(|step| grid.neighbors(&step[0]).contains(&step[1]))
}
