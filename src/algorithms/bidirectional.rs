use crate::algorithms::common::{ParentMap, SearchAlgorithm, SearchResult};
use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Breadth-first search run from both ends at once.
///
/// Each round expands one cell forward from the start, then one cell backward
/// from the target. The searches meet when a side pops a cell the other side
/// has already explored. Only exact overlap counts as a meeting, so the
/// returned path can be one step longer than the shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bidirectional;

/// One direction of the search.
struct Side {
    queue: VecDeque<Position>,
    in_queue: FxHashSet<Position>,
    explored: FxHashSet<Position>,
    parents: ParentMap,
}

impl Side {
    fn new(origin: Position) -> Self {
        let mut parents = ParentMap::default();
        parents.insert(origin, None);
        let mut in_queue = FxHashSet::default();
        in_queue.insert(origin);
        Side {
            queue: VecDeque::from([origin]),
            in_queue,
            explored: FxHashSet::default(),
            parents,
        }
    }

    /// Pops one cell. Returns it if the `other` side has already explored it,
    /// otherwise expands it.
    fn step(&mut self, grid: &Grid, other: &Side) -> Option<Position> {
        let pos = self.queue.pop_front()?;
        self.in_queue.remove(&pos);

        if other.explored.contains(&pos) {
            return Some(pos);
        }

        self.explored.insert(pos);
        for neighbor in grid.neighbors(&pos) {
            if self.explored.contains(&neighbor) || self.in_queue.contains(&neighbor) {
                continue;
            }
            self.parents.insert(neighbor, Some(pos));
            self.queue.push_back(neighbor);
            self.in_queue.insert(neighbor);
        }
        None
    }

    /// Parent chain starting at `from`, in walk order.
    fn chain(&self, from: Option<Position>) -> Option<Vec<Position>> {
        let mut cells = Vec::new();
        let mut current = from;
        while let Some(pos) = current {
            cells.push(pos);
            current = *self.parents.get(&pos)?;
        }
        Some(cells)
    }
}

impl Bidirectional {
    pub fn new() -> Self {
        Bidirectional
    }

    /// Start to `meeting` from the forward links, then the backward links
    /// from the cell after `meeting` to the target.
    fn join(forward: &Side, backward: &Side, meeting: Position) -> Option<Vec<Position>> {
        let mut path = forward.chain(Some(meeting))?;
        path.reverse();
        let tail = backward.chain(*backward.parents.get(&meeting)?)?;
        path.extend(tail);
        Some(path)
    }

    fn finish(
        grid: &Grid,
        forward: Side,
        backward: Side,
        history: Vec<FxHashSet<Position>>,
        meeting: Option<Position>,
    ) -> SearchResult {
        let path = meeting.and_then(|m| Self::join(&forward, &backward, m));
        if meeting.is_some() && path.is_none() {
            log::error!("bidirectional search met without a complete parent chain");
        }

        let mut explored = forward.explored;
        explored.extend(backward.explored);

        match path {
            Some(path) => SearchResult::found(grid, path, explored, history),
            None => SearchResult::not_found(grid, explored, history),
        }
    }
}

impl SearchAlgorithm for Bidirectional {
    fn name(&self) -> &'static str {
        "BIDIRECTIONAL"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        let mut forward = Side::new(grid.start);
        let mut backward = Side::new(grid.target);
        let mut history = Vec::new();

        while !forward.queue.is_empty() || !backward.queue.is_empty() {
            let mut snapshot: FxHashSet<Position> = forward.in_queue.clone();
            snapshot.extend(backward.in_queue.iter().copied());
            history.push(snapshot);

            if let Some(meeting) = forward.step(grid, &backward) {
                return Self::finish(grid, forward, backward, history, Some(meeting));
            }
            if let Some(meeting) = backward.step(grid, &forward) {
                return Self::finish(grid, forward, backward, history, Some(meeting));
            }
        }

        Self::finish(grid, forward, backward, history, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::common::is_valid_path;

    #[test]
    fn test_corridor() {
        let grid = Grid::new(10, 1, Position::new(0, 0), Position::new(9, 0)).unwrap();
        let result = Bidirectional::new().search(&grid);

        assert!(result.found);
        let expected: Vec<Position> = (0..10).map(|x| Position::new(x, 0)).collect();
        assert_eq!(result.path, expected);
        assert!(result.total_nodes_explored() <= 10);
    }

    #[test]
    fn test_start_is_target() {
        let grid = Grid::new(3, 3, Position::new(1, 1), Position::new(1, 1)).unwrap();
        let result = Bidirectional::new().search(&grid);
        assert!(result.found);
        assert_eq!(result.path, vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_adjacent_endpoints() {
        let grid = Grid::new(4, 4, Position::new(1, 1), Position::new(2, 1)).unwrap();
        let result = Bidirectional::new().search(&grid);
        assert!(result.found);
        assert!(is_valid_path(&grid, &result.path));
    }

    #[test]
    fn test_separated_halves() {
        let mut grid = Grid::new(7, 4, Position::new(0, 0), Position::new(6, 3)).unwrap();
        for y in 0..4 {
            grid.add_static_obstacle(3, y);
        }
        let result = Bidirectional::new().search(&grid);

        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.total_nodes_explored(), 24);
    }

    #[test]
    fn test_open_grid_path_is_valid() {
        let mut grid = Grid::new(12, 9, Position::new(1, 7), Position::new(10, 2)).unwrap();
        grid.add_static_obstacle(5, 4);
        grid.add_static_obstacle(5, 5);
        grid.add_static_obstacle(6, 4);
        let result = Bidirectional::new().search(&grid);
        assert!(result.found);
        assert!(is_valid_path(&grid, &result.path));
    }
}
