//! One generation of the genetic algorithm.
//!
//! [`GeneticEngine::evolve`] turns a population into the next one:
//! elitism → tournament selection → order crossover → swap mutation.

use super::config::GaConfig;
use super::operators::{ordered_crossover, swap_mutation};
use super::population::Population;
use super::selection::tournament_selection;
use crate::error::TspResult;
use crate::random::RandomSource;

/// Produces successive generations from a population.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticEngine {
    mutation_rate: f64,
    tournament_size: usize,
    elitism: bool,
}

impl Default for GeneticEngine {
    fn default() -> Self {
        Self::from_config(&GaConfig::default())
    }
}

impl GeneticEngine {
    /// Engine using the operator parameters of `config`.
    pub fn from_config(config: &GaConfig) -> Self {
        Self {
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
            elitism: config.elitism,
        }
    }

    /// Per-position swap probability.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Entrants per tournament.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Whether the fittest tour is carried over unchanged.
    pub fn elitism(&self) -> bool {
        self.elitism
    }

    /// Builds the next generation.
    ///
    /// The new population has the same size. With elitism, slot 0 holds an
    /// unmutated copy of the current fittest tour. Every other slot holds
    /// the order-crossover child of two tournament winners, mutated after
    /// all children have been created.
    ///
    /// # Errors
    /// Fails if `population` is empty or has unset slots, or if the
    /// tournament size is zero.
    pub fn evolve<'a, R: RandomSource>(
        &self,
        population: &Population<'a>,
        rng: &mut R,
    ) -> TspResult<Population<'a>> {
        let size = population.size();
        let mut next = Population::empty(size);

        let offset = if self.elitism {
            next.save_tour(0, population.fittest_checked()?.clone());
            1
        } else {
            0
        };

        for i in offset..size {
            let parent1 = tournament_selection(population, self.tournament_size, rng)?;
            let parent2 = tournament_selection(population, self.tournament_size, rng)?;
            let child = ordered_crossover(parent1, parent2, rng);
            next.save_tour(i, child);
        }

        for i in offset..size {
            if let Some(tour) = next.tour_mut(i) {
                swap_mutation(tour, self.mutation_rate, rng);
            }
        }

        debug_assert!(next.is_complete(), "evolve left an unset slot");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::CityRegistry;
    use crate::error::TspError;
    use crate::ga::tour::Tour;
    use crate::random::create_rng;

    #[test]
    fn test_from_config_copies_parameters() {
        let config = GaConfig::default()
            .with_mutation_rate(0.2)
            .with_tournament_size(3)
            .with_elitism(false);
        let engine = GeneticEngine::from_config(&config);
        assert_eq!(engine.mutation_rate(), 0.2);
        assert_eq!(engine.tournament_size(), 3);
        assert!(!engine.elitism());

        let default = GeneticEngine::default();
        assert_eq!(default.mutation_rate(), 0.015);
        assert_eq!(default.tournament_size(), 5);
        assert!(default.elitism());
    }

    #[test]
    fn test_evolve_preserves_size_and_validity() {
        let reg = CityRegistry::classic_twenty();
        let mut rng = create_rng(42);
        let engine = GeneticEngine::default();
        let mut pop = Population::random(&reg, 30, &mut rng);

        for _ in 0..20 {
            pop = engine.evolve(&pop, &mut rng).unwrap();
            assert_eq!(pop.size(), 30);
            assert!(pop.is_complete());
            for tour in pop.iter() {
                assert!(tour.is_permutation());
                assert_eq!(tour.city_index(0), 0);
            }
        }
    }

    #[test]
    fn test_elite_copied_into_slot_zero() {
        let reg = CityRegistry::classic_twenty();
        let mut rng = create_rng(11);
        let engine = GeneticEngine::from_config(
            &GaConfig::default().with_mutation_rate(1.0),
        );
        let pop = Population::random(&reg, 20, &mut rng);
        let elite = pop.get_fittest().unwrap().order().to_vec();

        let next = engine.evolve(&pop, &mut rng).unwrap();
        assert_eq!(next.tour(0).unwrap().order(), elite.as_slice());
    }

    #[test]
    fn test_best_distance_non_increasing_with_elitism() {
        let reg = CityRegistry::classic_twenty();
        let mut rng = create_rng(5);
        let engine = GeneticEngine::from_config(&GaConfig::default().with_mutation_rate(0.2));
        let mut pop = Population::random(&reg, 25, &mut rng);
        let mut best = pop.get_fittest().unwrap().distance();

        for _ in 0..50 {
            pop = engine.evolve(&pop, &mut rng).unwrap();
            let d = pop.get_fittest().unwrap().distance();
            assert!(d <= best + 1e-9, "best distance got worse: {d} > {best}");
            best = d;
        }
    }

    #[test]
    fn test_without_elitism_every_slot_is_offspring() {
        let reg = CityRegistry::from_coords([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
            .unwrap();
        let mut rng = create_rng(8);
        let engine = GeneticEngine::from_config(
            &GaConfig::default()
                .with_elitism(false)
                .with_tournament_size(1),
        );
        let pop = Population::from_tours(vec![Tour::new(&reg); 3]);
        let next = engine.evolve(&pop, &mut rng).unwrap();
        assert_eq!(next.size(), 3);
        assert!(next.iter().all(Tour::is_permutation));
    }

    #[test]
    fn test_evolve_single_city() {
        let reg = CityRegistry::from_coords([(3.0, 4.0)]).unwrap();
        let mut rng = create_rng(42);
        let engine = GeneticEngine::default();
        let pop = Population::random(&reg, 5, &mut rng);
        let next = engine.evolve(&pop, &mut rng).unwrap();
        assert_eq!(next.get_fittest().unwrap().distance(), 0.0);
    }

    #[test]
    fn test_evolve_rejects_incomplete_population() {
        let reg = CityRegistry::classic_twenty();
        let mut pop = Population::empty(5);
        pop.save_tour(0, Tour::new(&reg));
        let mut rng = create_rng(42);
        let err = GeneticEngine::default().evolve(&pop, &mut rng).unwrap_err();
        assert!(matches!(err, TspError::IncompletePopulation(1)));
    }
}
