//! Error types for building and replacing simulation generations
//!
//! Everything here is recoverable: a rejected config or scenario leaves the
//! current generation untouched. Broken internal invariants (a type id that
//! escapes its matrix) are assertions, not variants of [`SimError`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A `Config` field violates its positivity/minimum constraint
    #[error("invalid config: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Matrix row count does not match the number of particle types
    #[error("interaction matrix has {rows} rows, expected {expected}")]
    MatrixRows { rows: usize, expected: usize },

    /// A matrix row is shorter or longer than the number of particle types
    #[error("interaction matrix row {row} has {len} entries, expected {expected}")]
    MatrixRowLength { row: usize, len: usize, expected: usize },

    #[error("interaction matrix entry [{row}][{col}] = {value} is outside [-1, 1]")]
    MatrixEntryOutOfRange { row: usize, col: usize, value: f64 },

    #[error("scenario has {found} particles but particle_count is {expected}")]
    ParticleCountMismatch { found: usize, expected: usize },

    /// Position/velocity/type arrays of a particle state differ in length
    #[error("particle arrays differ in length: {positions} positions, {velocities} velocities, {type_ids} type ids")]
    ArrayLengthMismatch { positions: usize, velocities: usize, type_ids: usize },

    #[error("particle {index}: `{field}` has {len} components, expected 3")]
    MalformedVector { index: usize, field: &'static str, len: usize },

    #[error("particle {index}: `{field}` is not finite")]
    NonFinite { index: usize, field: &'static str },

    #[error("particle {index}: type_id {type_id} is not below type_count {type_count}")]
    TypeIdOutOfRange { index: usize, type_id: u32, type_count: u32 },

    #[error("particle {index}: position {position:?} lies outside the box [-{half_box}, {half_box}]")]
    PositionOutsideBox { index: usize, position: [f64; 3], half_box: f64 },
}
