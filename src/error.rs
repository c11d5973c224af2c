use thiserror::Error;

/// Failures reported by maze construction, lookup and generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {rows}x{columns}")]
    InvalidDimension { rows: u16, columns: u16 },

    #[error("cell ({row}, {column}) is outside the {rows}x{columns} maze")]
    OutOfBounds {
        row: u16,
        column: u16,
        rows: u16,
        columns: u16,
    },

    #[error("maze has already been generated")]
    AlreadyGenerated,

    /// Only produced by [`crate::verify`]. Seeing this means a generator is broken.
    #[error("maze invariant violated: {0}")]
    InvariantViolation(String),

    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),
}
