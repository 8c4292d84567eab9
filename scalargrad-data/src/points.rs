// scalargrad-data/src/points.rs

use crate::dataset::Dataset;
use crate::error::DataError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by [`PointGenerator::default`].
pub const DEFAULT_SEED: u64 = 5;

/// A set of 2D points stored as two coordinate columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointSet {
    /// Creates a point set from its x and y columns.
    ///
    /// # Errors
    /// `DataError::LengthMismatch` if the columns differ in length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, DataError> {
        if xs.len() != ys.len() {
            return Err(DataError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(PointSet { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Iterates over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

impl Dataset for PointSet {
    type Item = (f64, f64);

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        if index >= self.len() {
            return Err(DataError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok((self.xs[index], self.ys[index]))
    }

    fn len(&self) -> usize {
        self.xs.len()
    }
}

/// Reproducible generator of points uniformly distributed in the unit square.
///
/// The generator owns its random source. Two generators built from the same
/// seed produce the same sequence of point sets.
#[derive(Debug, Clone)]
pub struct PointGenerator {
    rng: StdRng,
}

impl PointGenerator {
    pub fn seeded(seed: u64) -> Self {
        PointGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws `n` points in `[0, 1) x [0, 1)`.
    ///
    /// All x coordinates are drawn first, then all y coordinates.
    pub fn generate(&mut self, n: usize) -> PointSet {
        let xs: Vec<f64> = (0..n).map(|_| self.rng.gen_range(0.0..1.0)).collect();
        let ys: Vec<f64> = (0..n).map(|_| self.rng.gen_range(0.0..1.0)).collect();
        PointSet { xs, ys }
    }
}

impl Default for PointGenerator {
    fn default() -> Self {
        PointGenerator::seeded(DEFAULT_SEED)
    }
}

#[cfg(test)]
#[path = "points_test.rs"]
mod tests;
