//! Error types for the TSP solver.
//!
//! Every error here is a precondition violation detected before any
//! generation runs, or an I/O problem in the driver. Broken internal
//! invariants are assertion failures, not errors.

use thiserror::Error;

/// Result type alias for fallible solver operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum TspError {
    /// The city registry has no cities.
    #[error("city registry must contain at least one city")]
    EmptyRegistry,

    /// Population size must be positive.
    #[error("population_size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    /// Tournament size must lie in `[1, population_size]`.
    #[error("tournament_size must be in [1, {population_size}], got {tournament_size}")]
    InvalidTournamentSize {
        /// Requested tournament size.
        tournament_size: usize,
        /// Configured population size.
        population_size: usize,
    },

    /// Mutation rate must be a probability.
    #[error("mutation_rate must be in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    /// A city ordering is not a permutation of the registry.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A population slot was read before it was assigned.
    #[error("population slot {0} is unset")]
    IncompletePopulation(usize),

    /// A line of a city file could not be parsed.
    #[error("line {line}: {message}")]
    CityParse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
