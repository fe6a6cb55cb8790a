//! Euclidean Traveling Salesman approximation.
//!
//! A genetic algorithm evolves a population of tours, then 2-opt local
//! search polishes the best one:
//!
//! - **Cities**: [`city::CityRegistry`], an immutable ordered set of points
//!   shared by reference with every tour.
//! - **Genetic Algorithm**: [`ga`] — tours with cached distance, fixed-size
//!   populations, tournament selection, order crossover, swap mutation and
//!   elitism. Position 0 of every tour is pinned to the registry's first
//!   city.
//! - **2-opt**: [`two_opt`] — segment reversal until a local optimum.
//! - **Driver**: [`solver::TspSolver`] runs the whole pipeline and records
//!   the best distance per generation; [`report`] renders SVG charts.
//!
//! All randomness goes through [`random::RandomSource`], so a seeded RNG
//! makes a run fully reproducible.
//!
//! ```
//! use u_tsp::city::CityRegistry;
//! use u_tsp::ga::GaConfig;
//! use u_tsp::solver::TspSolver;
//! use u_tsp::two_opt::TwoOptConfig;
//!
//! let registry = CityRegistry::from_coords([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
//!     .unwrap();
//! let config = GaConfig::default().with_generations(10).with_seed(1);
//! let solution = TspSolver::run(&registry, &config, &TwoOptConfig::default()).unwrap();
//! assert!((solution.distance() - 40.0).abs() < 1e-9);
//! ```

pub mod city;
pub mod error;
pub mod ga;
pub mod logging;
pub mod random;
pub mod report;
pub mod solver;
pub mod two_opt;
