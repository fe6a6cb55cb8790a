//! 2-opt execution.
//!
//! # Algorithm
//!
//! One pass visits every pair `1 ≤ i ≤ n-3`, `i+2 ≤ j ≤ n-1`. The pair
//! replaces edges `(i-1, i)` and `(j-1, j)` with `(i-1, j-1)` and `(i, j)`
//! by reversing `route[i..j]`. Every improving pair found is applied
//! immediately and the scan continues within the same pass; passes repeat
//! until one applies no move.
//!
//! The closing edge `(n-1, 0)` is never removed, and position 0 never
//! moves.
//!
//! # Complexity
//! O(n²) per pass; the number of passes is not bounded by a polynomial in
//! general, which is what [`TwoOptConfig::max_passes`] is for.

use super::config::TwoOptConfig;
use crate::city::CityRegistry;
use crate::ga::{route_length, Tour};

/// Statistics of one 2-opt run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptOutcome {
    /// Full passes executed, including the final pass that found nothing.
    pub passes: usize,
    /// Segment reversals applied.
    pub improvements: usize,
    /// `true` if the run stopped at a local optimum rather than the pass cap.
    pub converged: bool,
    /// Route length before the first pass.
    pub initial_distance: f64,
    /// Route length after the last pass.
    pub final_distance: f64,
}

/// Runs 2-opt on `route` (registry indices) in place.
///
/// # Panics
/// Panics if `route` contains an index outside `registry`.
pub fn two_opt(registry: &CityRegistry, route: &mut [usize], config: &TwoOptConfig) -> TwoOptOutcome {
    let n = route.len();
    let initial_distance = route_length(registry, route);
    let d = |a: usize, b: usize| registry.distance(a, b);

    let mut passes = 0;
    let mut improvements = 0;
    let mut improved = true;

    while improved {
        if config.max_passes.is_some_and(|cap| passes >= cap) {
            break;
        }
        improved = false;
        passes += 1;

        for i in 1..n.saturating_sub(2) {
            for j in (i + 2)..n {
                let removed = d(route[i - 1], route[i]) + d(route[j - 1], route[j]);
                let added = d(route[i - 1], route[j - 1]) + d(route[i], route[j]);
                if added < removed {
                    route[i..j].reverse();
                    improved = true;
                    improvements += 1;
                }
            }
        }
        log::trace!("2-opt pass {passes}: improved={improved}");
    }

    let final_distance = route_length(registry, route);
    log::debug!(
        "2-opt: {passes} passes, {improvements} reversals, {initial_distance:.3} -> {final_distance:.3}"
    );

    TwoOptOutcome {
        passes,
        improvements,
        converged: !improved,
        initial_distance,
        final_distance,
    }
}

/// Applies 2-opt to tours.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Returns a locally optimized copy of `tour` with run statistics.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::city::CityRegistry;
    /// use u_tsp::ga::Tour;
    /// use u_tsp::two_opt::{TwoOptConfig, TwoOptRunner};
    ///
    /// let reg = CityRegistry::from_coords([(0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0)])
    ///     .unwrap();
    /// let crossed = Tour::new(&reg);
    /// let (refined, outcome) = TwoOptRunner::run(&crossed, &TwoOptConfig::default());
    /// assert!((refined.distance() - 40.0).abs() < 1e-9);
    /// assert!(outcome.converged);
    /// ```
    pub fn run<'a>(tour: &Tour<'a>, config: &TwoOptConfig) -> (Tour<'a>, TwoOptOutcome) {
        let registry = tour.registry();
        let mut route = tour.order().to_vec();
        let outcome = two_opt(registry, &mut route, config);
        (Tour::from_order_unchecked(registry, route), outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn square() -> CityRegistry {
        CityRegistry::from_coords([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_uncrosses_square() {
        let reg = square();
        let mut route = vec![0, 2, 1, 3];
        let outcome = two_opt(&reg, &mut route, &TwoOptConfig::default());
        assert_eq!(route, vec![0, 1, 2, 3]);
        assert!((outcome.final_distance - 40.0).abs() < 1e-9);
        assert_eq!(outcome.improvements, 1);
        assert_eq!(outcome.passes, 2);
        assert!(outcome.converged);
    }

    #[test]
    fn test_local_optimum_is_fixed_point() {
        let reg = square();
        let mut route = vec![0, 1, 2, 3];
        let outcome = two_opt(&reg, &mut route, &TwoOptConfig::default());
        assert_eq!(route, vec![0, 1, 2, 3]);
        assert_eq!(outcome.passes, 1);
        assert_eq!(outcome.improvements, 0);
        assert!(outcome.converged);
    }

    #[test]
    fn test_second_run_is_single_pass() {
        let reg = CityRegistry::classic_twenty();
        let mut rng = create_rng(42);
        let tour = Tour::generate_random(&reg, &mut rng);
        let (refined, first) = TwoOptRunner::run(&tour, &TwoOptConfig::default());
        assert!(first.converged);

        let (again, second) = TwoOptRunner::run(&refined, &TwoOptConfig::default());
        assert_eq!(second.passes, 1);
        assert_eq!(second.improvements, 0);
        assert_eq!(again.order(), refined.order());
    }

    #[test]
    fn test_tiny_routes_untouched() {
        let reg = CityRegistry::from_coords([(0.0, 0.0), (5.0, 5.0), (9.0, 1.0)]).unwrap();
        for mut route in [vec![0], vec![0, 1], vec![0, 2, 1]] {
            let before = route.clone();
            let outcome = two_opt(&reg, &mut route, &TwoOptConfig::default());
            assert_eq!(route, before);
            assert_eq!(outcome.passes, 1);
        }
    }

    #[test]
    fn test_pass_cap() {
        let reg = CityRegistry::classic_twenty();
        let mut rng = create_rng(9);
        let tour = Tour::generate_random(&reg, &mut rng);

        let (_, capped) = TwoOptRunner::run(&tour, &TwoOptConfig::default().with_max_passes(1));
        assert_eq!(capped.passes, 1);

        let (unchanged, zero) = TwoOptRunner::run(&tour, &TwoOptConfig::default().with_max_passes(0));
        assert_eq!(zero.passes, 0);
        assert!(!zero.converged);
        assert_eq!(unchanged.order(), tour.order());
    }

    #[test]
    fn test_start_city_stays_first() {
        let reg = CityRegistry::classic_twenty();
        let mut rng = create_rng(1);
        for _ in 0..10 {
            let tour = Tour::generate_random(&reg, &mut rng);
            let (refined, _) = TwoOptRunner::run(&tour, &TwoOptConfig::default());
            assert_eq!(refined.city_index(0), 0);
            assert!(refined.is_permutation());
        }
    }

    proptest! {
        #[test]
        fn prop_never_increases_distance(
            coords in proptest::collection::vec((0u32..200, 0u32..200), 1..30),
            seed in any::<u64>(),
        ) {
            let reg = CityRegistry::from_coords(
                coords.into_iter().map(|(x, y)| (x as f64, y as f64)),
            ).unwrap();
            let mut rng = create_rng(seed);
            let tour = Tour::generate_random(&reg, &mut rng);
            let before = tour.distance();
            let (refined, outcome) = TwoOptRunner::run(&tour, &TwoOptConfig::default());
            prop_assert!(refined.is_permutation());
            prop_assert!(refined.distance() <= before + 1e-9);
            prop_assert!(outcome.converged);
        }
    }
}
