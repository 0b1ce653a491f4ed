use thiserror::Error;

pub type ObserverResult<T> = Result<T, ObserverError>;

/// Failures reported by the fallible accessors of
/// [`ObserverPtr`](crate::ObserverPtr).
///
/// Dereferencing through [`Deref`](std::ops::Deref) does not return this,
/// it panics with the `Display` of [`ObserverError::Empty`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObserverError {
    /// The observer does not point at anything
    #[error("dereferenced an empty observer")]
    Empty,

    /// The observed value is of a different concrete type
    #[error("observed value is not a `{expected}`")]
    TypeMismatch { expected: &'static str },
}
