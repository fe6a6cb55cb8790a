//! Genetic algorithm over tours.
//!
//! Tours are permutations of a [`CityRegistry`](crate::city::CityRegistry)
//! whose first position is pinned to the registry's first city. The GA
//! evolves a fixed-size [`Population`] one generation at a time through
//! [`GeneticEngine::evolve`].
//!
//! # Key Types
//!
//! - [`Tour`]: A candidate route with cached distance and fitness
//! - [`Population`]: Fixed-size slots of tours with fittest lookup
//! - [`GeneticEngine`]: Elitism, tournament selection, crossover, mutation
//! - [`GaConfig`]: Algorithm parameters
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover and swap mutation on tours
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Potvin (1996), "Genetic algorithms for the traveling salesman problem"

mod config;
mod engine;
pub mod operators;
mod population;
mod selection;
mod tour;

pub use config::GaConfig;
pub use engine::GeneticEngine;
pub use population::Population;
pub use selection::tournament_selection;
pub use tour::{route_length, Tour};
