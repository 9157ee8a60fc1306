//! Email shape checking.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+$").expect("valid email regex"));

/// Lenient well-formedness check: exactly one `@` with at least one
/// character on each side. Whether the mailbox exists is not this
/// layer's concern.
pub fn is_well_formed_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}
