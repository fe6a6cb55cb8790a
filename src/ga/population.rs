//! Fixed-size populations of tours.

use super::tour::Tour;
use crate::city::CityRegistry;
use crate::error::{TspError, TspResult};
use crate::random::RandomSource;

/// A fixed-size collection of tour slots.
///
/// The size is set at construction and never changes. Slots start unset
/// when the population is created with [`Population::empty`] and are filled
/// through [`save_tour`](Population::save_tour) while a generation is built.
#[derive(Debug, Clone)]
pub struct Population<'a> {
    tours: Vec<Option<Tour<'a>>>,
}

impl<'a> Population<'a> {
    /// Population of `size` unset slots.
    pub fn empty(size: usize) -> Self {
        Self {
            tours: vec![None; size],
        }
    }

    /// Population of `size` randomly generated tours.
    pub fn random<R: RandomSource>(registry: &'a CityRegistry, size: usize, rng: &mut R) -> Self {
        Self {
            tours: (0..size)
                .map(|_| Some(Tour::generate_random(registry, rng)))
                .collect(),
        }
    }

    /// Population holding exactly `tours`, in order.
    pub fn from_tours(tours: Vec<Tour<'a>>) -> Self {
        Self {
            tours: tours.into_iter().map(Some).collect(),
        }
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.tours.len()
    }

    /// Stores `tour` at `index`, replacing any previous occupant.
    ///
    /// # Panics
    /// Panics if `index >= size()`.
    pub fn save_tour(&mut self, index: usize, tour: Tour<'a>) {
        self.tours[index] = Some(tour);
    }

    /// The tour at `index`, or `None` if the slot is unset.
    pub fn tour(&self, index: usize) -> Option<&Tour<'a>> {
        self.tours.get(index).and_then(Option::as_ref)
    }

    /// Mutable access to the tour at `index`.
    pub fn tour_mut(&mut self, index: usize) -> Option<&mut Tour<'a>> {
        self.tours.get_mut(index).and_then(Option::as_mut)
    }

    /// `true` when every slot holds a tour.
    pub fn is_complete(&self) -> bool {
        self.tours.iter().all(Option::is_some)
    }

    /// Iterates over assigned tours in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Tour<'a>> {
        self.tours.iter().flatten()
    }

    /// The tour with the highest fitness.
    ///
    /// Ties go to the **last** tour with the maximal fitness. Unset slots
    /// are skipped; returns `None` when no slot is assigned.
    pub fn get_fittest(&self) -> Option<&Tour<'a>> {
        fittest(self.iter())
    }

    /// Like [`get_fittest`](Self::get_fittest), but fails on any unset slot.
    ///
    /// # Errors
    /// Returns [`TspError::IncompletePopulation`] naming the first unset
    /// slot, or [`TspError::InvalidPopulationSize`] for a zero-size
    /// population.
    pub fn fittest_checked(&self) -> TspResult<&Tour<'a>> {
        if let Some(slot) = self.tours.iter().position(Option::is_none) {
            return Err(TspError::IncompletePopulation(slot));
        }
        self.get_fittest()
            .ok_or(TspError::InvalidPopulationSize(0))
    }
}

/// Linear scan for maximal fitness; later equal-fitness tours win.
pub(crate) fn fittest<'t, 'a: 't, I>(tours: I) -> Option<&'t Tour<'a>>
where
    I: IntoIterator<Item = &'t Tour<'a>>,
{
    let mut iter = tours.into_iter();
    let mut best = iter.next()?;
    let mut best_fitness = best.fitness();
    for tour in iter {
        let f = tour.fitness();
        if best_fitness <= f {
            best = tour;
            best_fitness = f;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn square() -> CityRegistry {
        CityRegistry::from_coords([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_random_population_is_full() {
        let reg = CityRegistry::classic_twenty();
        let mut rng = create_rng(42);
        let pop = Population::random(&reg, 30, &mut rng);
        assert_eq!(pop.size(), 30);
        assert!(pop.is_complete());
        assert!(pop.iter().all(Tour::is_permutation));
    }

    #[test]
    fn test_empty_population_slots() {
        let reg = square();
        let mut pop = Population::empty(3);
        assert_eq!(pop.size(), 3);
        assert!(!pop.is_complete());
        assert!(pop.get_fittest().is_none());

        pop.save_tour(1, Tour::new(&reg));
        assert!(pop.tour(0).is_none());
        assert!(pop.tour(1).is_some());
        assert!(matches!(
            pop.fittest_checked(),
            Err(TspError::IncompletePopulation(0))
        ));
    }

    #[test]
    fn test_save_tour_overwrites() {
        let reg = square();
        let mut pop = Population::from_tours(vec![Tour::new(&reg)]);
        let crossed = Tour::from_order(&reg, vec![0, 2, 1, 3]).unwrap();
        pop.save_tour(0, crossed);
        assert_eq!(pop.size(), 1);
        assert_eq!(pop.tour(0).unwrap().order(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_get_fittest_picks_shortest() {
        let reg = square();
        let pop = Population::from_tours(vec![
            Tour::from_order(&reg, vec![0, 2, 1, 3]).unwrap(),
            Tour::new(&reg),
            Tour::from_order(&reg, vec![0, 1, 3, 2]).unwrap(),
        ]);
        let best = pop.get_fittest().unwrap();
        assert_eq!(best.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_get_fittest_tie_goes_to_last() {
        let reg = square();
        // Same cycle in both directions: identical distance.
        let pop = Population::from_tours(vec![
            Tour::from_order(&reg, vec![0, 1, 2, 3]).unwrap(),
            Tour::from_order(&reg, vec![0, 3, 2, 1]).unwrap(),
            Tour::from_order(&reg, vec![0, 2, 1, 3]).unwrap(),
        ]);
        let best = pop.get_fittest().unwrap();
        assert_eq!(best.order(), &[0, 3, 2, 1]);
    }

    #[test]
    fn test_fittest_checked_zero_size() {
        let pop = Population::empty(0);
        assert!(matches!(
            pop.fittest_checked(),
            Err(TspError::InvalidPopulationSize(0))
        ));
    }
}
