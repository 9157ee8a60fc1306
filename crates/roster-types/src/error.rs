use thiserror::Error;

/// Errors produced by type-level parsing.
///
/// These belong to the transport boundary (turning caller-supplied text
/// into typed values); store operations never produce them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),
}
