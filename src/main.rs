use clap::Parser;

use uninformed_pathfinding::algorithms::Algorithm;
use uninformed_pathfinding::config::Config;
use uninformed_pathfinding::scenario::Scenario;
use uninformed_pathfinding::statistics::optimal_path_length;

fn main() {
    env_logger::init();
    let config = Config::parse();

    let algorithms: Vec<Algorithm> = if config.algorithm.eq_ignore_ascii_case("all") {
        Algorithm::all().to_vec()
    } else {
        match config.algorithm.parse::<Algorithm>() {
            Ok(algorithm) => vec![algorithm],
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    };

    let mut scenario = match Scenario::generate(&config) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to create grid: {}", e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        let grid = scenario.grid();
        println!("Uninformed search on a {}x{} grid", grid.width, grid.height);
        println!(
            "Walls: {}, Start: {}, Target: {}",
            grid.walls().len(),
            grid.start,
            grid.target
        );
        println!("Seed: {} (for reproducibility)", scenario.seed());
        println!();
    }

    if algorithms.len() > 1 {
        let comparison = scenario.run_all();
        print!("{}", comparison);
        if config.show_grid {
            for report in &comparison.reports {
                println!("\n{}:", report.algorithm);
                print!("{}", report.render(scenario.grid()));
            }
        }
        return;
    }

    for algorithm in algorithms {
        let report = scenario.run(algorithm);
        println!("=== RESULTS ===");
        print!("{}", report);
        if let Some(efficiency) = report.efficiency(optimal_path_length(scenario.grid())) {
            println!("Path efficiency: {:.3}", efficiency);
        }
        if config.show_grid {
            println!();
            print!("{}", report.render(scenario.grid()));
        }
    }
}
