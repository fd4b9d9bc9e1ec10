use crate::algorithms::common::SearchResult;
use crate::error::{Result, SearchError};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// A grid cell. Identity is the coordinate pair and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// True when `other` is one of the eight cells around `self`.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Neighbor offsets in expansion priority order: Up, Right, Down, Down-Right,
/// Left, Up-Left, Up-Right, Down-Left. Depth-first strategies rely on this
/// order to pick between equal-length routes.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (1, 1),
    (-1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.02;

/// The search environment: bounds, endpoints, static walls and transient
/// obstacles. Strategies only read it; obstacles change between searches.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub start: Position,
    pub target: Position,
    walls: FxHashSet<Position>,
    transient_obstacles: FxHashSet<Position>,
    spawn_probability: f64,
}

impl Grid {
    pub fn new(width: i32, height: i32, start: Position, target: Position) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let grid = Grid {
            width,
            height,
            start,
            target,
            walls: FxHashSet::default(),
            transient_obstacles: FxHashSet::default(),
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
        };

        if !grid.is_valid(&start) {
            return Err(SearchError::InvalidConfiguration(format!(
                "start position {} is out of grid bounds ({}x{})",
                start, width, height
            )));
        }
        if !grid.is_valid(&target) {
            return Err(SearchError::InvalidConfiguration(format!(
                "target position {} is out of grid bounds ({}x{})",
                target, width, height
            )));
        }

        Ok(grid)
    }

    /// Sets the chance that `spawn_transient_obstacle` places an obstacle.
    pub fn with_spawn_probability(mut self, probability: f64) -> Self {
        self.spawn_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn is_valid(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, pos: &Position) -> bool {
        !self.is_valid(pos) || self.walls.contains(pos) || self.transient_obstacles.contains(pos)
    }

    pub fn is_wall(&self, pos: &Position) -> bool {
        self.walls.contains(pos)
    }

    pub fn is_transient_obstacle(&self, pos: &Position) -> bool {
        self.transient_obstacles.contains(pos)
    }

    pub fn walls(&self) -> &FxHashSet<Position> {
        &self.walls
    }

    pub fn transient_obstacles(&self) -> &FxHashSet<Position> {
        &self.transient_obstacles
    }

    /// Adds a permanent wall. Cells outside the grid and the start/target
    /// cells are ignored.
    pub fn add_static_obstacle(&mut self, x: i32, y: i32) {
        let pos = Position { x, y };
        if self.is_valid(&pos) && pos != self.start && pos != self.target {
            self.walls.insert(pos);
        }
    }

    /// Places up to `count` walls at random free cells, giving up after
    /// `10 * count` attempts. Returns how many walls were added.
    pub fn add_walls_randomly<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let max_attempts = count.saturating_mul(10);
        let mut added = 0;
        let mut attempts = 0;

        while added < count && attempts < max_attempts {
            let pos = Position {
                x: rng.gen_range(0..self.width),
                y: rng.gen_range(0..self.height),
            };
            if !self.walls.contains(&pos) && pos != self.start && pos != self.target {
                self.add_static_obstacle(pos.x, pos.y);
                added += 1;
            }
            attempts += 1;
        }

        if added < count {
            log::warn!(
                "placed {} of {} requested walls after {} attempts",
                added,
                count,
                attempts
            );
        }
        added
    }

    /// With probability `spawn_probability`, blocks one random free cell until
    /// the next `clear_transient_obstacles`.
    pub fn spawn_transient_obstacle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if rng.gen::<f64>() >= self.spawn_probability {
            return None;
        }

        let mut free_cells = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                let pos = Position { x, y };
                if !self.walls.contains(&pos)
                    && !self.transient_obstacles.contains(&pos)
                    && pos != self.start
                    && pos != self.target
                {
                    free_cells.push(pos);
                }
            }
        }

        let spawned = *free_cells.choose(rng)?;
        self.transient_obstacles.insert(spawned);
        log::debug!("spawned transient obstacle at {}", spawned);
        Some(spawned)
    }

    /// Places a transient obstacle at an explicit cell, with the same
    /// restrictions as static walls.
    pub fn add_transient_obstacle(&mut self, x: i32, y: i32) {
        let pos = Position { x, y };
        if self.is_valid(&pos) && pos != self.start && pos != self.target {
            self.transient_obstacles.insert(pos);
        }
    }

    pub fn clear_transient_obstacles(&mut self) {
        self.transient_obstacles.clear();
    }

    /// In-bounds, unblocked neighbors of `pos` in `NEIGHBOR_OFFSETS` order.
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let next = Position {
                x: pos.x + dx,
                y: pos.y + dy,
            };
            if !self.is_blocked(&next) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// Transient obstacles touching any cell of `cells`, sorted.
    pub fn transient_obstacles_near<'a, I>(&self, cells: I) -> Vec<Position>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        if self.transient_obstacles.is_empty() {
            return Vec::new();
        }
        let mut touched = FxHashSet::default();
        for cell in cells {
            for obstacle in &self.transient_obstacles {
                if cell.is_adjacent(obstacle) {
                    touched.insert(*obstacle);
                }
            }
        }
        let mut touched: Vec<Position> = touched.into_iter().collect();
        touched.sort();
        touched
    }

    /// Text picture of the grid, one row per line. With a result, explored
    /// cells and the path are drawn on top.
    pub fn render(&self, result: Option<&SearchResult>) -> String {
        let path: FxHashSet<Position> = result
            .map(|r| r.path.iter().copied().collect())
            .unwrap_or_default();

        let mut out = String::with_capacity(self.render_capacity());
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position { x, y };
                let c = if pos == self.start {
                    'S'
                } else if pos == self.target {
                    'T'
                } else if self.walls.contains(&pos) {
                    '#'
                } else if self.transient_obstacles.contains(&pos) {
                    'O'
                } else if path.contains(&pos) {
                    '*'
                } else if result.map_or(false, |r| r.explored.contains(&pos)) {
                    '.'
                } else {
                    ' '
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }

    /// Bytes needed by `render`: one per cell plus a newline per row.
    fn render_capacity(&self) -> usize {
        (self.width as usize)
            .saturating_add(1)
            .saturating_mul(self.height as usize)
    }
}
