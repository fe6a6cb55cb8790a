//! Permutation operators on tours.
//!
//! Both operators leave position 0 untouched, so every tour produced by the
//! GA starts at the registry's first city.
//!
//! # Crossover
//!
//! - [`ordered_crossover`]: two-point order crossover with wrap-around
//!   segments (Davis, 1985)
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position pairwise swap with a fixed rate
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Potvin (1996), "Genetic algorithms for the traveling salesman problem"

use super::tour::{is_permutation, Tour};
use crate::random::RandomSource;

// ============================================================================
// Crossover
// ============================================================================

/// Order crossover with two uniformly drawn cut points.
///
/// Both cut points are drawn independently from `[0, len)`; see
/// [`ordered_crossover_at`] for how they are interpreted.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn ordered_crossover<'a, R: RandomSource>(
    parent1: &Tour<'a>,
    parent2: &Tour<'a>,
    rng: &mut R,
) -> Tour<'a> {
    let n = parent1.len();
    let start = rng.uniform_int(0, n - 1);
    let end = rng.uniform_int(0, n - 1);
    ordered_crossover_at(parent1, parent2, start, end)
}

/// Order crossover with explicit cut points.
///
/// For each position `i` in `1..len`:
///
/// - `start < end`: parent1's city is kept when `start < i < end`
/// - `start > end`: parent1's city is kept unless `end < i < start`
///   (the segment wraps around the end of the tour)
/// - `start == end`: nothing is kept from parent1
///
/// The remaining slots are filled left to right with parent2's cities in
/// parent2's order, skipping cities already placed. Position 0 is
/// parent1's starting city.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn ordered_crossover_at<'a>(
    parent1: &Tour<'a>,
    parent2: &Tour<'a>,
    start: usize,
    end: usize,
) -> Tour<'a> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    let start_city = parent1.city_index(0);
    child[0] = Some(start_city);
    placed[start_city] = true;

    for i in 1..n {
        let keep = if start < end {
            start < i && i < end
        } else if start > end {
            !(end < i && i < start)
        } else {
            false
        };
        if keep {
            let city = parent1.city_index(i);
            child[i] = Some(city);
            placed[city] = true;
        }
    }

    // Fill cursor only moves forward: slots left of it are already full.
    let mut cursor = 1;
    for &city in parent2.order() {
        if placed[city] {
            continue;
        }
        while child[cursor].is_some() {
            cursor += 1;
        }
        child[cursor] = Some(city);
        placed[city] = true;
    }

    let order: Vec<usize> = child
        .into_iter()
        .map(|slot| slot.expect("every slot filled by order crossover"))
        .collect();
    debug_assert!(
        is_permutation(&order, parent1.registry().count()),
        "order crossover produced a non-permutation: {order:?}"
    );
    Tour::from_order_unchecked(parent1.registry(), order)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation over positions `1..len`.
///
/// Each position is visited once; with probability `rate` its city is
/// exchanged with the city at a uniformly drawn position in `1..len`. The
/// drawn position may equal the current one, which leaves the tour
/// unchanged.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: RandomSource>(tour: &mut Tour<'_>, rate: f64, rng: &mut R) {
    let n = tour.len();
    for pos1 in 1..n {
        if rng.uniform_float() < rate {
            let pos2 = rng.uniform_int(1, n - 1);
            tour.swap(pos1, pos2);
        }
    }
    debug_assert!(tour.is_permutation(), "swap mutation broke the permutation");
}

// ============================================================================
// Tests
// ============================================================================
