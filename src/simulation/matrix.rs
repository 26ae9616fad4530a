//! Per-type interaction coefficients
//!
//! `matrix.get(a, b)` is how strongly a particle of type `a` is pulled towards
//! (positive) or pushed away from (negative) a particle of type `b`. The table
//! is not symmetric: `get(a, b)` and `get(b, a)` are drawn independently.

use rand::Rng;

use crate::error::SimError;

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix {
    size: usize,
    data: Vec<f64>, // row-major, size * size entries in [-1, 1]
}

impl InteractionMatrix {
    /// `size x size` matrix with independent uniform entries in `[-1, 1]`
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let data = (0..size * size).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        Self { size, data }
    }

    /// Build from explicit rows; must be square with entries in `[-1, 1]`
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, SimError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != size {
                return Err(SimError::MatrixRowLength {
                    row,
                    len: entries.len(),
                    expected: size,
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                if !(-1.0..=1.0).contains(&value) {
                    return Err(SimError::MatrixEntryOutOfRange { row, col, value });
                }
                data.push(value);
            }
        }
        Ok(Self { size, data })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Coefficient for the ordered type pair (`source`, `other`)
    ///
    /// Panics if either type id is outside `[0, size)`; a type id escaping the
    /// matrix means a generation was built inconsistently.
    #[inline]
    pub fn get(&self, source: u32, other: u32) -> f64 {
        let (i, j) = (source as usize, other as usize);
        assert!(
            i < self.size && j < self.size,
            "type id pair ({source}, {other}) out of range for {n}x{n} interaction matrix",
            n = self.size
        );
        self.data[i * self.size + j]
    }

    /// Rows of the matrix, in type order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.size.max(1))
    }
}
