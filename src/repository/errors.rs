use thiserror::Error;

/// Errors reported by repository implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be accessed.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
