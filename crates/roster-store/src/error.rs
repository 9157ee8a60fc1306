use thiserror::Error;

use roster_gate::Violation;
use roster_types::PersonId;

/// Errors produced by store operations.
///
/// Lookup and delete misses are not here: they come back as `Ok(None)`
/// and `Ok(false)` respectively. Only faulty input, conflicts with
/// stored state, and process-level lock failures are errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The caller supplied no request at all.
    #[error("request must be provided")]
    MissingRequest,

    /// The request failed a declared constraint; the message is the
    /// first violation found.
    #[error(transparent)]
    Invalid(#[from] Violation),

    /// A country with this exact name is already stored.
    #[error("country name already exists: {name}")]
    DuplicateCountryName { name: String },

    /// An update addressed a person that is not in the store.
    #[error("person not found: {id}")]
    PersonNotFound { id: PersonId },

    /// Delete was called without an id.
    #[error("person id must be provided")]
    MissingPersonId,

    /// A store lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    /// True when the failure lies in the caller's input: absent or
    /// constraint-violating.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            StoreError::MissingRequest | StoreError::Invalid(_) | StoreError::MissingPersonId
        )
    }

    /// True when the request conflicts with already-stored state.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::DuplicateCountryName { .. })
    }

    /// True when the addressed record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::PersonNotFound { .. })
    }
}
