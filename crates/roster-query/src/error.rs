use thiserror::Error;

/// Errors from parsing selector names.
///
/// Only the transport boundary sees these: inside the engine an
/// unrecognized selector is represented as `None` and means "leave the
/// sequence alone", never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFieldError {
    #[error("unknown search field: {0}")]
    UnknownSearchField(String),

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}
