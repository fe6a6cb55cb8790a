//! End-to-end solve: GA generations followed by 2-opt.
//!
//! [`TspSolver`] orchestrates the complete run:
//! random population → evolve N generations → 2-opt on the best tour.

use crate::city::{City, CityRegistry};
use crate::error::TspResult;
use crate::ga::{GaConfig, GeneticEngine, Population, Tour};
use crate::random::{rng_from_seed, RandomSource};
use crate::two_opt::{TwoOptConfig, TwoOptOutcome, TwoOptRunner};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a solver run.
#[derive(Debug, Clone)]
pub struct TspSolution<'a> {
    /// Fittest tour of the initial random population.
    pub initial_best: Tour<'a>,

    /// Fittest tour of the final generation.
    pub ga_best: Tour<'a>,

    /// `ga_best` after 2-opt.
    pub refined: Tour<'a>,

    /// Best distance of each generation, in generation order.
    ///
    /// Does not include the initial population.
    pub distance_history: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// 2-opt statistics.
    pub two_opt: TwoOptOutcome,
}

impl TspSolution<'_> {
    /// Length of the refined tour.
    pub fn distance(&self) -> f64 {
        self.refined.distance()
    }

    /// Cities of the refined tour in visiting order.
    pub fn route(&self) -> Vec<City> {
        self.refined.cities().copied().collect()
    }
}

/// Runs the GA and 2-opt pipeline.
///
/// # Usage
///
/// ```
/// use u_tsp::city::CityRegistry;
/// use u_tsp::ga::GaConfig;
/// use u_tsp::solver::TspSolver;
/// use u_tsp::two_opt::TwoOptConfig;
///
/// let registry = CityRegistry::classic_twenty();
/// let config = GaConfig::default().with_generations(20).with_seed(42);
/// let solution = TspSolver::run(&registry, &config, &TwoOptConfig::default()).unwrap();
/// assert_eq!(solution.distance_history.len(), 20);
/// assert!(solution.distance() <= solution.ga_best.distance());
/// ```
pub struct TspSolver;

impl TspSolver {
    /// Runs with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Fails before any generation runs if `config` is invalid.
    pub fn run<'a>(
        registry: &'a CityRegistry,
        config: &GaConfig,
        two_opt: &TwoOptConfig,
    ) -> TspResult<TspSolution<'a>> {
        Self::run_with_cancel(registry, config, two_opt, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is set, evolution stops before the next generation and
    /// the best tour so far is still refined by 2-opt.
    pub fn run_with_cancel<'a>(
        registry: &'a CityRegistry,
        config: &GaConfig,
        two_opt: &TwoOptConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<TspSolution<'a>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(registry, config, two_opt, cancel, &mut rng)
    }

    /// Runs with a caller-supplied random source; `config.seed` is ignored.
    pub fn run_with_rng<'a, R: RandomSource>(
        registry: &'a CityRegistry,
        config: &GaConfig,
        two_opt: &TwoOptConfig,
        cancel: Option<Arc<AtomicBool>>,
        rng: &mut R,
    ) -> TspResult<TspSolution<'a>> {
        config.validate()?;

        let engine = GeneticEngine::from_config(config);
        log::debug!(
            "engine: mutation rate {}, tournament {}, elitism {}",
            engine.mutation_rate(),
            engine.tournament_size(),
            engine.elitism()
        );

        // 1. Initialize population
        let mut population = Population::random(registry, config.population_size, rng);
        let initial_best = population.fittest_checked()?.clone();
        log::info!(
            "{} cities, population {}: initial distance {:.3}",
            registry.count(),
            config.population_size,
            initial_best.distance()
        );

        // 2. Evolutionary loop
        let mut distance_history = Vec::with_capacity(config.generations);
        let mut cancelled = false;
        for generation in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    log::info!("cancelled after {generation} generations");
                    break;
                }
            }

            population = engine.evolve(&population, rng)?;
            let best = population.fittest_checked()?.distance();
            distance_history.push(best);
            log::debug!("generation {}: best distance {best:.3}", generation + 1);
        }

        // 3. Local search on the GA result
        let ga_best = population.fittest_checked()?.clone();
        let (refined, outcome) = TwoOptRunner::run(&ga_best, two_opt);
        log::info!(
            "GA distance {:.3}, after 2-opt {:.3}",
            ga_best.distance(),
            refined.distance()
        );

        Ok(TspSolution {
            initial_best,
            ga_best,
            refined,
            generations: distance_history.len(),
            distance_history,
            cancelled,
            two_opt: outcome,
        })
    }
}
