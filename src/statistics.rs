use crate::algorithms::{Algorithm, SearchResult};
use crate::grid::{Grid, Position};
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::Duration;

/// Outcome of running one strategy on a scenario.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub elapsed: Duration,
    /// Transient obstacle placed just before this run, if any.
    pub spawned_obstacle: Option<Position>,
}

impl RunReport {
    /// Path cells divided by the shortest possible path cells. 1.0 is optimal.
    pub fn efficiency(&self, optimal_path_length: Option<usize>) -> Option<f64> {
        match optimal_path_length {
            Some(optimal) if self.result.found && optimal > 0 => {
                Some(self.result.path_length() as f64 / optimal as f64)
            }
            _ => None,
        }
    }

    /// Draws `grid` as this run saw it, with the transient obstacle spawned
    /// for the run put back in place.
    pub fn render(&self, grid: &Grid) -> String {
        match self.spawned_obstacle {
            Some(pos) => {
                let mut as_searched = grid.clone();
                as_searched.add_transient_obstacle(pos.x, pos.y);
                as_searched.render(Some(&self.result))
            }
            None => grid.render(Some(&self.result)),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        if self.result.found {
            writeln!(f, "Target found!")?;
            writeln!(f, "Path length: {} steps", self.result.path_length())?;
        } else {
            writeln!(f, "Target not found")?;
        }
        writeln!(f, "Nodes explored: {}", self.result.total_nodes_explored())?;
        writeln!(f, "Frontier snapshots: {}", self.result.frontier_history.len())?;
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;

        if let Some(pos) = self.spawned_obstacle {
            writeln!(f, "Transient obstacle spawned at {}", pos)?;
        }
        if !self.result.transient_obstacles_encountered.is_empty() {
            let positions: Vec<String> = self
                .result
                .transient_obstacles_encountered
                .iter()
                .map(|p| p.to_string())
                .collect();
            writeln!(
                f,
                "Transient obstacles encountered: {} [{}]",
                positions.len(),
                positions.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Reports for several strategies run over the same grid.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub reports: Vec<RunReport>,
    pub optimal_path_length: Option<usize>,
}

impl Comparison {
    pub fn new(reports: Vec<RunReport>, optimal_path_length: Option<usize>) -> Self {
        Comparison {
            reports,
            optimal_path_length,
        }
    }

    /// Successful run with the fewest explored cells.
    pub fn least_explored(&self) -> Option<&RunReport> {
        self.reports
            .iter()
            .filter(|r| r.result.found)
            .min_by_key(|r| r.result.total_nodes_explored())
    }

    /// Successful run with the shortest path.
    pub fn shortest_path(&self) -> Option<&RunReport> {
        self.reports
            .iter()
            .filter(|r| r.result.found)
            .min_by_key(|r| r.result.path_length())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ALGORITHM COMPARISON RESULTS ===")?;
        match self.optimal_path_length {
            Some(len) => writeln!(f, "Shortest possible path: {} cells", len)?,
            None => writeln!(f, "Shortest possible path: none (target unreachable)")?,
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<15} {:<8} {:<13} {:<16} {:<12} {:<12}",
            "Algorithm", "Found", "Path Length", "Nodes Explored", "Efficiency", "Time"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;

        for report in &self.reports {
            let found = if report.result.found { "Yes" } else { "No" };
            let path_len = if report.result.found {
                report.result.path_length().to_string()
            } else {
                "N/A".to_string()
            };
            let efficiency = report
                .efficiency(self.optimal_path_length)
                .map(|e| format!("{:.3}", e))
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(
                f,
                "{:<15} {:<8} {:<13} {:<16} {:<12} {:<12}",
                report.algorithm.name(),
                found,
                path_len,
                report.result.total_nodes_explored(),
                efficiency,
                format!("{:.2?}", report.elapsed)
            )?;
        }

        writeln!(f)?;
        match (self.least_explored(), self.shortest_path()) {
            (Some(least), Some(shortest)) => {
                writeln!(
                    f,
                    "Fewest nodes explored: {} ({})",
                    least.algorithm,
                    least.result.total_nodes_explored()
                )?;
                writeln!(
                    f,
                    "Shortest path found: {} ({} cells)",
                    shortest.algorithm,
                    shortest.result.path_length()
                )?;
            }
            _ => writeln!(f, "No algorithm reached the target.")?,
        }
        Ok(())
    }
}

/// Cells on a shortest start-to-target path over static walls only, computed
/// independently of the strategies in this crate.
pub fn optimal_path_length(grid: &Grid) -> Option<usize> {
    let mut walls_only = grid.clone();
    walls_only.clear_transient_obstacles();
    bfs(
        &walls_only.start,
        |p| walls_only.neighbors(p),
        |p| *p == walls_only.target,
    )
    .map(|path| path.len())
}
