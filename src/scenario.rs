use crate::algorithms::Algorithm;
use crate::config::{Config, SearchConfig};
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::statistics::{optimal_path_length, Comparison, RunReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// A grid plus the random source used to furnish it, shared by every
/// strategy run against it so comparisons see the same walls.
pub struct Scenario {
    grid: Grid,
    rng: StdRng,
    seed: u64,
    search_config: SearchConfig,
}

impl Scenario {
    /// Builds the grid described by `config` and places its random walls.
    pub fn generate(config: &Config) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let grid = Grid::new(
            config.width,
            config.height,
            Position::new(config.start_x, config.start_y),
            Position::new(config.target_x, config.target_y),
        )?
        .with_spawn_probability(config.spawn_probability);

        let mut scenario = Scenario::new(grid, config.search_config(), seed);
        let placed = scenario.add_random_walls(config.num_walls);
        log::info!(
            "generated {}x{} grid with {} walls (seed {})",
            config.width,
            config.height,
            placed,
            seed
        );
        Ok(scenario)
    }

    pub fn new(grid: Grid, search_config: SearchConfig, seed: u64) -> Self {
        Scenario {
            grid,
            rng: StdRng::seed_from_u64(seed),
            seed,
            search_config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn add_random_walls(&mut self, count: usize) -> usize {
        self.grid.add_walls_randomly(count, &mut self.rng)
    }

    /// Clears transient obstacles, maybe spawns a new one, then runs a fresh
    /// instance of `algorithm`.
    pub fn run(&mut self, algorithm: Algorithm) -> RunReport {
        self.grid.clear_transient_obstacles();
        let spawned_obstacle = self.grid.spawn_transient_obstacle(&mut self.rng);

        let strategy = algorithm.build(&self.search_config);
        let started = Instant::now();
        let result = strategy.search(&self.grid);
        let elapsed = started.elapsed();

        log::debug!(
            "{} finished: found={}, path={}, explored={}, in {:.2?}",
            strategy.name(),
            result.found,
            result.path_length(),
            result.total_nodes_explored(),
            elapsed
        );

        RunReport {
            algorithm,
            result,
            elapsed,
            spawned_obstacle,
        }
    }

    /// Runs every strategy in turn over the same walls.
    pub fn run_all(&mut self) -> Comparison {
        let reports = Algorithm::all()
            .into_iter()
            .map(|algorithm| self.run(algorithm))
            .collect();
        self.grid.clear_transient_obstacles();
        Comparison::new(reports, optimal_path_length(&self.grid))
    }
}
