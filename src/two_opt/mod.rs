//! 2-opt local search.
//!
//! Repeatedly reverses tour segments whose reversal shortens the route,
//! until a full pass finds no improving move (a 2-opt local optimum).
//! Used to polish the best tour produced by the genetic algorithm.
//!
//! # References
//!
//! - Croes, G. A. (1958). "A method for solving traveling-salesman
//!   problems", *Operations Research* 6(6), 791-812.

mod config;
mod runner;

pub use config::TwoOptConfig;
pub use runner::{two_opt, TwoOptOutcome, TwoOptRunner};
