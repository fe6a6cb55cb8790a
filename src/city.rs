//! Cities and the city registry.
//!
//! A [`CityRegistry`] is built once, before optimization starts, and is
//! shared read-only with every tour. Tours refer to cities by their index
//! in the registry, so two cities with identical coordinates remain
//! distinct entries.

use crate::error::{TspError, TspResult};
use crate::random::RandomSource;
use std::fmt;

/// An immutable point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// The 20-city demo instance, on a 200 x 200 grid.
const CLASSIC_TWENTY: [(f64, f64); 20] = [
    (60.0, 200.0),
    (180.0, 200.0),
    (80.0, 180.0),
    (140.0, 180.0),
    (20.0, 160.0),
    (100.0, 160.0),
    (200.0, 160.0),
    (140.0, 140.0),
    (40.0, 120.0),
    (100.0, 120.0),
    (180.0, 100.0),
    (60.0, 80.0),
    (120.0, 80.0),
    (180.0, 60.0),
    (20.0, 40.0),
    (100.0, 40.0),
    (200.0, 40.0),
    (20.0, 20.0),
    (60.0, 20.0),
    (160.0, 20.0),
];

/// Ordered, immutable collection of cities.
///
/// Never empty: [`CityRegistry::new`] rejects an empty list, so every
/// consumer can rely on index 0 existing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<City>", into = "Vec<City>"))]
pub struct CityRegistry {
    cities: Vec<City>,
}

impl CityRegistry {
    /// Creates a registry from an ordered list of cities.
    ///
    /// # Errors
    /// Returns [`TspError::EmptyRegistry`] if `cities` is empty.
    pub fn new(cities: Vec<City>) -> TspResult<Self> {
        if cities.is_empty() {
            return Err(TspError::EmptyRegistry);
        }
        Ok(Self { cities })
    }

    /// Creates a registry from `(x, y)` pairs.
    pub fn from_coords<I>(coords: I) -> TspResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(coords.into_iter().map(|(x, y)| City::new(x, y)).collect())
    }

    /// The 20-city demo instance.
    pub fn classic_twenty() -> Self {
        Self {
            cities: CLASSIC_TWENTY
                .iter()
                .map(|&(x, y)| City::new(x, y))
                .collect(),
        }
    }

    /// `n` cities with integer coordinates drawn uniformly from `[0, extent]`.
    ///
    /// # Errors
    /// Returns [`TspError::EmptyRegistry`] if `n == 0`.
    pub fn random<R: RandomSource>(n: usize, extent: u32, rng: &mut R) -> TspResult<Self> {
        let extent = extent as usize;
        let cities = (0..n)
            .map(|_| {
                let x = rng.uniform_int(0, extent) as f64;
                let y = rng.uniform_int(0, extent) as f64;
                City::new(x, y)
            })
            .collect();
        Self::new(cities)
    }

    /// Parses one city per line: `x,y` or `x y`.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    /// Returns [`TspError::CityParse`] on a malformed line and
    /// [`TspError::EmptyRegistry`] if no city was read.
    pub fn parse(text: &str) -> TspResult<Self> {
        let mut cities = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .collect();
            if fields.len() != 2 {
                return Err(TspError::CityParse {
                    line: idx + 1,
                    message: format!("expected two coordinates, found {}", fields.len()),
                });
            }
            let coord = |s: &str| {
                s.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| TspError::CityParse {
                        line: idx + 1,
                        message: format!("invalid coordinate '{s}'"),
                    })
            };
            cities.push(City::new(coord(fields[0])?, coord(fields[1])?));
        }
        Self::new(cities)
    }

    /// Number of cities.
    pub fn count(&self) -> usize {
        self.cities.len()
    }

    /// City at `index`.
    ///
    /// # Panics
    /// Panics if `index >= count()`.
    pub fn get(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// City at `index`, or `None` when out of range.
    pub fn try_get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    /// Distance between the cities at indices `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.cities[a].distance_to(&self.cities[b])
    }

    /// Iterates cities in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }
}

impl TryFrom<Vec<City>> for CityRegistry {
    type Error = TspError;

    fn try_from(cities: Vec<City>) -> TspResult<Self> {
        Self::new(cities)
    }
}

impl From<CityRegistry> for Vec<City> {
    fn from(registry: CityRegistry) -> Self {
        registry.cities
    }
}
