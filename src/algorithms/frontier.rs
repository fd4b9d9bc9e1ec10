//! Frontier disciplines and the shared single-source traversal loop.
//!
//! BFS, DFS, DLS and UCS differ only in how they store and extract
//! discovered cells. Each discipline is a [`Frontier`]; [`traverse`] owns the
//! explored set, parent links and snapshot history for one run.

use crate::algorithms::common::{finish_found, ParentMap, SearchResult};
use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// A frontier entry: the cell and the number of steps from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub pos: Position,
    pub depth: usize,
}

pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);

    fn pop(&mut self) -> Option<FrontierEntry>;

    fn is_empty(&self) -> bool;

    /// Cells currently waiting, in no particular order.
    fn snapshot(&self) -> FxHashSet<Position>;

    /// LIFO frontiers push siblings reversed so they pop in neighbor order.
    fn reverse_siblings(&self) -> bool {
        false
    }

    /// Whether a cell popped at `depth` may have its neighbors expanded.
    fn expands(&self, _depth: usize) -> bool {
        true
    }
}

/// First-in first-out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn snapshot(&self) -> FxHashSet<Position> {
        self.queue.iter().map(|e| e.pos).collect()
    }
}

/// Last-in first-out, optionally refusing to expand past a depth limit.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<FrontierEntry>,
    depth_limit: Option<usize>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells popped at `depth_limit` are treated as leaves.
    pub fn with_depth_limit(depth_limit: usize) -> Self {
        LifoFrontier {
            stack: Vec::new(),
            depth_limit: Some(depth_limit),
        }
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn snapshot(&self) -> FxHashSet<Position> {
        self.stack.iter().map(|e| e.pos).collect()
    }

    fn reverse_siblings(&self) -> bool {
        true
    }

    fn expands(&self, depth: usize) -> bool {
        self.depth_limit.map_or(true, |limit| depth < limit)
    }
}

/// Heap key: path cost, then push order. Smaller keys pop first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CostKey {
    cost: usize,
    sequence: u64,
    entry: FrontierEntry,
}

impl Ord for CostKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for CostKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier keyed by accumulated unit-step cost. Equal costs pop
/// in insertion order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<CostKey>>,
    counter: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        let key = CostKey {
            cost: entry.depth,
            sequence: self.counter,
            entry,
        };
        self.counter += 1;
        self.heap.push(Reverse(key));
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(key)| key.entry)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn snapshot(&self) -> FxHashSet<Position> {
        self.heap.iter().map(|Reverse(key)| key.entry.pos).collect()
    }
}

/// Per-run bookkeeping, created fresh by every call to [`traverse`].
#[derive(Debug, Default)]
struct SearchState {
    explored: FxHashSet<Position>,
    parents: ParentMap,
    in_frontier: FxHashSet<Position>,
    frontier_history: Vec<FxHashSet<Position>>,
}

/// Runs one single-source search from `grid.start` using `frontier`'s
/// extraction order.
pub fn traverse<F: Frontier>(grid: &Grid, mut frontier: F) -> SearchResult {
    let mut state = SearchState::default();

    state.parents.insert(grid.start, None);
    state.in_frontier.insert(grid.start);
    frontier.push(FrontierEntry {
        pos: grid.start,
        depth: 0,
    });

    while !frontier.is_empty() {
        state.frontier_history.push(frontier.snapshot());

        let Some(FrontierEntry { pos, depth }) = frontier.pop() else {
            break;
        };
        state.in_frontier.remove(&pos);

        if !state.explored.insert(pos) {
            continue;
        }

        if pos == grid.target {
            return finish_found(grid, &state.parents, state.explored, state.frontier_history);
        }

        if !frontier.expands(depth) {
            continue;
        }

        let mut neighbors = grid.neighbors(&pos);
        if frontier.reverse_siblings() {
            neighbors.reverse();
        }
        for neighbor in neighbors {
            if state.explored.contains(&neighbor) || state.in_frontier.contains(&neighbor) {
                continue;
            }
            state.parents.insert(neighbor, Some(pos));
            state.in_frontier.insert(neighbor);
            frontier.push(FrontierEntry {
                pos: neighbor,
                depth: depth + 1,
            });
        }
    }

    SearchResult::not_found(grid, state.explored, state.frontier_history)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: i32, y: i32, depth: usize) -> FrontierEntry {
        FrontierEntry {
            pos: Position::new(x, y),
            depth,
        }
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = FifoFrontier::default();
        frontier.push(entry(0, 0, 0));
        frontier.push(entry(1, 0, 1));
        assert_eq!(frontier.pop(), Some(entry(0, 0, 0)));
        assert_eq!(frontier.pop(), Some(entry(1, 0, 1)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_lifo_order_and_depth_limit() {
        let mut frontier = LifoFrontier::with_depth_limit(2);
        frontier.push(entry(0, 0, 0));
        frontier.push(entry(1, 0, 1));
        assert_eq!(frontier.pop(), Some(entry(1, 0, 1)));
        assert!(frontier.reverse_siblings());
        assert!(frontier.expands(1));
        assert!(!frontier.expands(2));
        assert!(LifoFrontier::new().expands(10_000));
    }

    #[test]
    fn test_priority_breaks_ties_by_insertion() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(entry(5, 5, 2));
        frontier.push(entry(1, 0, 1));
        frontier.push(entry(0, 1, 1));
        frontier.push(entry(3, 3, 1));

        assert_eq!(frontier.pop(), Some(entry(1, 0, 1)));
        assert_eq!(frontier.pop(), Some(entry(0, 1, 1)));
        assert_eq!(frontier.pop(), Some(entry(3, 3, 1)));
        assert_eq!(frontier.pop(), Some(entry(5, 5, 2)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(entry(2, 2, 3));
        frontier.push(entry(1, 1, 1));
        let snapshot = frontier.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.contains(&Position::new(2, 2)));
    }

    #[test]
    fn test_traverse_records_one_snapshot_per_step() {
        let grid = Grid::new(3, 1, Position::new(0, 0), Position::new(2, 0)).unwrap();
        let result = traverse(&grid, FifoFrontier::default());
        assert!(result.found);
        assert_eq!(
            result.path,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(result.frontier_history.len(), 3);
        assert!(result.frontier_history[0].contains(&Position::new(0, 0)));
    }
}
