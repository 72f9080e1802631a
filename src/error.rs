use thiserror::Error;

/// Top-level error type for the polywind crate.
#[derive(Debug, Error)]
pub enum PolywindError {
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Errors related to reading point/polygon records from a file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Convenience type alias for results using [`PolywindError`].
pub type Result<T> = std::result::Result<T, PolywindError>;
