pub mod bfs;
pub mod bidirectional;
pub mod common;
pub mod dfs;
pub mod dls;
pub mod frontier;
pub mod iddfs;
pub mod ucs;

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

pub use bfs::Bfs;
pub use bidirectional::Bidirectional;
pub use common::{is_valid_path, reconstruct_path, SearchAlgorithm, SearchResult};
pub use dfs::Dfs;
pub use dls::DepthLimited;
pub use iddfs::IterativeDeepening;
pub use ucs::UniformCost;

/// The available strategies, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 6] {
        [
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::Ucs,
            Algorithm::Dls,
            Algorithm::Iddfs,
            Algorithm::Bidirectional,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Dls => "DLS",
            Algorithm::Iddfs => "IDDFS",
            Algorithm::Bidirectional => "BIDIRECTIONAL",
        }
    }

    /// Builds a fresh strategy configured from `config`.
    pub fn build(&self, config: &SearchConfig) -> Box<dyn SearchAlgorithm> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new()),
            Algorithm::Dfs => Box::new(Dfs::new()),
            Algorithm::Ucs => Box::new(UniformCost::new()),
            Algorithm::Dls => Box::new(DepthLimited::new(config.depth_limit)),
            Algorithm::Iddfs => Box::new(IterativeDeepening {
                max_depth: config.max_depth,
            }),
            Algorithm::Bidirectional => Box::new(Bidirectional::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "dls" => Ok(Algorithm::Dls),
            "iddfs" => Ok(Algorithm::Iddfs),
            "bidirectional" | "bidi" => Ok(Algorithm::Bidirectional),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Position};

    #[test]
    fn test_parse_names() {
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" iddfs ".parse::<Algorithm>(), Ok(Algorithm::Iddfs));
        assert_eq!("bidi".parse::<Algorithm>(), Ok(Algorithm::Bidirectional));
        assert!(matches!(
            "a_star".parse::<Algorithm>(),
            Err(SearchError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_built_strategy_names_match() {
        let config = SearchConfig::default();
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.build(&config).name(), algorithm.name());
        }
    }

    #[test]
    fn test_build_applies_depth_limit() {
        let grid = Grid::new(5, 5, Position::new(0, 0), Position::new(4, 4)).unwrap();
        let config = SearchConfig {
            depth_limit: 2,
            max_depth: Some(2),
        };
        assert!(!Algorithm::Dls.build(&config).search(&grid).found);
        assert!(!Algorithm::Iddfs.build(&config).search(&grid).found);
        assert!(Algorithm::Bfs.build(&config).search(&grid).found);
    }
}
