//! Error types for collection operations.
//!
//! Every failure a collection operation can surface is a local,
//! recoverable condition: the caller decides whether to retry with
//! different input, substitute a default, or abort. Nothing here
//! panics, and no operation retries internally.
//!
//! Absence is not an error. Lookup operations (`first`, `last`, `get`
//! and friends) model "no entry qualified" as [`None`] rather than a
//! failure; [`CollectionError`] is reserved for conditions that violate
//! an operation's contract.

use thiserror::Error;

/// Failure conditions surfaced by collection operations.
///
/// # Examples
///
/// ```rust
/// use kolekt::collection::Collection;
/// use kolekt::error::CollectionError;
///
/// let empty: Collection<i32> = Collection::new();
/// assert_eq!(empty.max(), Err(CollectionError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The operation requires at least one entry.
    ///
    /// Returned by the aggregations (`avg`, `max`, `min`), `reduce`,
    /// `random`, and `pop` when the collection is empty.
    #[error("operation requires a non-empty collection")]
    Empty,

    /// A value did not have the element count an operation requires.
    ///
    /// Returned by `map_spread` when a value expands to a different
    /// number of elements than the transform accepts.
    #[error("expected a sequence of {expected} elements, found {actual}")]
    ShapeMismatch {
        /// Element count the transform accepts.
        expected: usize,
        /// Element count the value actually produced.
        actual: usize,
    },

    /// A record value does not expose the requested field.
    ///
    /// Returned by `group_by_field` when a value's
    /// [`Record::field`](crate::record::Record::field) yields nothing
    /// for the selector.
    #[error("value has no field named `{field}`")]
    MissingField {
        /// The field name that was requested.
        field: String,
    },

    /// Two collections that must pair positionally differ in length.
    ///
    /// Returned by `combine` when the key and value collections are not
    /// the same size.
    #[error("cannot combine {keys} keys with {values} values")]
    LengthMismatch {
        /// Number of entries in the key collection.
        keys: usize,
        /// Number of entries in the value collection.
        values: usize,
    },

    /// A size parameter was outside the accepted range.
    ///
    /// Returned by `chunk` when the requested group size is zero.
    #[error("group size must be positive, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::CollectionError;
    use rstest::rstest;

    #[rstest]
    #[case(CollectionError::Empty, "operation requires a non-empty collection")]
    #[case(
        CollectionError::ShapeMismatch { expected: 2, actual: 3 },
        "expected a sequence of 2 elements, found 3"
    )]
    #[case(
        CollectionError::MissingField { field: "department".to_string() },
        "value has no field named `department`"
    )]
    #[case(
        CollectionError::LengthMismatch { keys: 2, values: 3 },
        "cannot combine 2 keys with 3 values"
    )]
    #[case(CollectionError::InvalidSize { size: 0 }, "group size must be positive, got 0")]
    fn test_error_messages(#[case] error: CollectionError, #[case] message: &str) {
        assert_eq!(error.to_string(), message);
    }
}
