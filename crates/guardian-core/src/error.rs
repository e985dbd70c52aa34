//! Domain-level error types.

use thiserror::Error;

use crate::ports::StoreError;

/// Draft validation failures - surfaced to the poster before the
/// confirmation step.
///
/// Checks run in a fixed order (emptiness, then vocabulary, then length), so
/// a draft with several problems reports the first one only and the poster is
/// guided through fixes one at a time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Title or details are blank after trimming.
    #[error("both a title and the details are required")]
    EmptyField,

    /// A banned token appears in the title or the details.
    #[error("the draft contains language that violates the friendly-posts guidelines")]
    ContentViolation,

    /// Details length is outside the policy bounds.
    #[error("details must be between {min} and {max} characters")]
    LengthViolation { min: usize, max: usize },
}

/// Post deletion failures.
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("no post found with id {0}")]
    NotFound(String),

    /// The requesting session is not the post's author.
    #[error("post {0} belongs to a different session")]
    Forbidden(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
