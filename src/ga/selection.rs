//! Parent selection.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::population::{fittest, Population};
use super::tour::Tour;
use crate::error::{TspError, TspResult};
use crate::random::RandomSource;

/// Tournament selection: the fittest of `size` tours drawn uniformly with
/// replacement.
///
/// Ties between equally fit entrants go to the one drawn last, matching
/// [`Population::get_fittest`].
///
/// # Complexity
/// O(k) per selection
///
/// # Errors
/// Returns [`TspError::InvalidTournamentSize`] when `size == 0` or the
/// population is empty, and [`TspError::IncompletePopulation`] when a
/// drawn slot is unset.
pub fn tournament_selection<'p, 'a, R: RandomSource>(
    population: &'p Population<'a>,
    size: usize,
    rng: &mut R,
) -> TspResult<&'p Tour<'a>> {
    let n = population.size();
    if size == 0 || n == 0 {
        return Err(TspError::InvalidTournamentSize {
            tournament_size: size,
            population_size: n,
        });
    }

    let mut entrants = Vec::with_capacity(size);
    for _ in 0..size {
        let idx = rng.uniform_int(0, n - 1);
        let tour = population
            .tour(idx)
            .ok_or(TspError::IncompletePopulation(idx))?;
        entrants.push(tour);
    }

    fittest(entrants).ok_or(TspError::InvalidTournamentSize {
        tournament_size: size,
        population_size: n,
    })
}
