pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod scenario;
pub mod statistics;

pub use algorithms::{Algorithm, SearchAlgorithm, SearchResult};
pub use error::SearchError;
pub use grid::{Grid, Position};
