use crate::grid::Grid;
use clap::Parser;

pub const DEFAULT_DEPTH_LIMIT: usize = 150;

/// Command line options for the `uninformed_pathfinding` binary.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 50)]
    pub width: i32,

    #[arg(long, default_value_t = 50)]
    pub height: i32,

    #[arg(long, default_value_t = 5)]
    pub start_x: i32,

    #[arg(long, default_value_t = 5)]
    pub start_y: i32,

    #[arg(long, default_value_t = 45)]
    pub target_x: i32,

    #[arg(long, default_value_t = 45)]
    pub target_y: i32,

    #[arg(long, default_value_t = 250)]
    pub num_walls: usize,

    /// bfs, dfs, ucs, dls, iddfs, bidirectional, or all
    #[arg(long, default_value = "all")]
    pub algorithm: String,

    /// Depth at which depth-limited search stops expanding
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    pub depth_limit: usize,

    /// Deepest limit tried by iterative deepening (default: twice the larger grid side)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Chance of a transient obstacle appearing before each run
    #[arg(long, default_value_t = 0.0)]
    pub spawn_probability: f64,

    /// Seed for wall and obstacle placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub show_grid: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth_limit: self.depth_limit,
            max_depth: self.max_depth,
        }
    }
}

/// Tunables for the depth-bounded strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth_limit: usize,
    /// `None` means twice the larger grid dimension.
    pub max_depth: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            max_depth: None,
        }
    }
}

/// Iterative deepening ceiling used when none is configured.
pub fn default_max_depth(grid: &Grid) -> usize {
    2 * grid.width.max(grid.height) as usize
}
