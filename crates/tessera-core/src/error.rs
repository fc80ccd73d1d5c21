//! Error types for keyword parsing.
//!
//! Rendering fragments never fails. The only fallible operations are the
//! `FromStr` conversions that turn configuration text back into policy
//! enums.

/// Errors that can occur while parsing SQL keywords into typed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text is not an ON CONFLICT resolution policy.
    #[error("Unknown conflict policy '{0}', expected one of ROLLBACK, ABORT, FAIL, IGNORE, REPLACE")]
    UnknownConflict(String),

    /// The text is not a sort order.
    #[error("Unknown sort order '{0}', expected ASC or DESC")]
    UnknownOrder(String),

    /// The text is not a column type affinity.
    #[error("Unknown column type '{0}'")]
    UnknownColumnType(String),

    /// The text is not a foreign key action.
    #[error("Unknown foreign key action '{0}'")]
    UnknownForeignKeyAction(String),
}

/// Result type for keyword parsing.
pub type Result<T> = std::result::Result<T, Error>;
