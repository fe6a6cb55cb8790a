//! Candidate tours.
//!
//! A [`Tour`] is an ordering of every city in a [`CityRegistry`], stored as
//! registry indices. Position 0 always holds the registry's first city:
//! rotations of a cycle describe the same route, so only positions
//! `1..len` take part in shuffling, crossover and mutation.

use crate::city::{City, CityRegistry};
use crate::error::{TspError, TspResult};
use crate::random::RandomSource;
use std::cell::Cell;
use std::fmt;

/// A closed route visiting every city of the registry exactly once.
///
/// Distance is computed lazily and cached. The cache is cleared by every
/// positional write, so [`distance`](Tour::distance) and
/// [`fitness`](Tour::fitness) never return stale values. A cached distance
/// of `0.0` (all cities coincident) is a real value and is not recomputed.
#[derive(Debug, Clone)]
pub struct Tour<'a> {
    registry: &'a CityRegistry,
    order: Vec<usize>,
    distance: Cell<Option<f64>>,
}

impl<'a> Tour<'a> {
    /// Tour visiting cities in registry order.
    pub fn new(registry: &'a CityRegistry) -> Self {
        Self {
            registry,
            order: (0..registry.count()).collect(),
            distance: Cell::new(None),
        }
    }

    /// Random tour: registry order with positions `1..len` shuffled.
    pub fn generate_random<R: RandomSource>(registry: &'a CityRegistry, rng: &mut R) -> Self {
        let mut tour = Self::new(registry);
        rng.shuffle(&mut tour.order[1..]);
        tour
    }

    /// Builds a tour from an explicit ordering of registry indices.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidTour`] unless `order` is a permutation of
    /// `0..registry.count()`.
    pub fn from_order(registry: &'a CityRegistry, order: Vec<usize>) -> TspResult<Self> {
        if order.len() != registry.count() {
            return Err(TspError::InvalidTour(format!(
                "expected {} cities, got {}",
                registry.count(),
                order.len()
            )));
        }
        let mut seen = vec![false; order.len()];
        for &idx in &order {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(TspError::InvalidTour(format!("city {idx} visited twice")))
                }
                None => {
                    return Err(TspError::InvalidTour(format!("city {idx} out of range")))
                }
            }
        }
        Ok(Self::from_order_unchecked(registry, order))
    }

    /// Builds a tour from an ordering already known to be a permutation.
    pub(crate) fn from_order_unchecked(registry: &'a CityRegistry, order: Vec<usize>) -> Self {
        debug_assert_eq!(order.len(), registry.count());
        Self {
            registry,
            order,
            distance: Cell::new(None),
        }
    }

    /// The registry this tour refers to.
    pub fn registry(&self) -> &'a CityRegistry {
        self.registry
    }

    /// Number of positions (equals the registry's city count).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false` for a tour over a valid registry.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registry index of the city at `position`.
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    pub fn city_index(&self, position: usize) -> usize {
        self.order[position]
    }

    /// The city at `position`.
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    pub fn city(&self, position: usize) -> &'a City {
        self.registry.get(self.order[position])
    }

    /// Places registry city `city` at `position` and clears the cache.
    ///
    /// No permutation check happens here; callers that write individual
    /// positions must leave the tour a permutation before it is evaluated.
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    pub fn set_city(&mut self, position: usize, city: usize) {
        self.order[position] = city;
        self.distance.set(None);
    }

    /// Exchanges the cities at two positions and clears the cache.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
        self.distance.set(None);
    }

    /// Linear membership test for registry city `city`.
    pub fn contains_city(&self, city: usize) -> bool {
        self.order.contains(&city)
    }

    /// Registry indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cities in visiting order.
    pub fn cities(&self) -> impl Iterator<Item = &'a City> + '_ {
        let registry = self.registry;
        self.order.iter().map(move |&i| registry.get(i))
    }

    /// Total length of the closed route.
    pub fn distance(&self) -> f64 {
        if let Some(d) = self.distance.get() {
            return d;
        }
        let d = route_length(self.registry, &self.order);
        self.distance.set(Some(d));
        d
    }

    /// `1 / distance()`. Infinite when the distance is zero.
    pub fn fitness(&self) -> f64 {
        1.0 / self.distance()
    }

    /// `true` when every registry city appears exactly once.
    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.order, self.registry.count())
    }
}

impl fmt::Display for Tour<'_> {
    /// Formats as `|x, y|x, y|...|`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for city in self.cities() {
            write!(f, "{city}|")?;
        }
        Ok(())
    }
}

/// Length of the closed route through `order`, including the edge from the
/// last city back to the first.
pub fn route_length(registry: &CityRegistry, order: &[usize]) -> f64 {
    let n = order.len();
    (0..n)
        .map(|i| registry.distance(order[i], order[(i + 1) % n]))
        .sum()
}

/// Checks that `order` is a permutation of `0..n`.
pub(crate) fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &idx in order {
        if idx >= n || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}
