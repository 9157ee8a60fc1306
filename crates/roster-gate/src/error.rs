/// A declared-constraint violation.
///
/// Carries the name of the field that failed and the message reported to
/// callers. `Display` renders the message alone, so the first violation
/// reads as a plain sentence wherever it propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}
