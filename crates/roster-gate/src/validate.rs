use tracing::debug;

use roster_types::{CountryAddRequest, PersonAddRequest, PersonFields, PersonUpdateRequest};

use crate::email::is_well_formed_email;
use crate::error::Violation;

const COUNTRY_NAME_MISSING: Violation =
    Violation::new("name", "country name must be provided");
const PERSON_NAME_MISSING: Violation =
    Violation::new("name", "person name must be provided");
const EMAIL_MISSING: Violation = Violation::new("email", "email must be provided");
const EMAIL_MALFORMED: Violation =
    Violation::new("email", "email must be a valid email address");

/// Checks a request against its declared constraints, consuming it and
/// producing the validated payload.
///
/// Constraints run in declaration order and stop at the first failure,
/// so callers see exactly one violation at a time.
pub trait Validate {
    /// What a request becomes once its constraints hold.
    type Output;

    fn validate(self) -> Result<Self::Output, Violation>;
}

/// Required-text check: present and not blank after trimming.
fn require_text(value: Option<String>, violation: Violation) -> Result<String, Violation> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(reject(violation)),
    }
}

fn reject(violation: Violation) -> Violation {
    debug!(field = violation.field, reason = violation.message, "request rejected");
    violation
}

impl Validate for CountryAddRequest {
    type Output = String;

    fn validate(self) -> Result<Self::Output, Violation> {
        require_text(self.name, COUNTRY_NAME_MISSING)
    }
}

impl Validate for PersonAddRequest {
    type Output = PersonFields;

    fn validate(self) -> Result<Self::Output, Violation> {
        let name = require_text(self.name, PERSON_NAME_MISSING)?;
        let email = require_text(self.email, EMAIL_MISSING)?;
        if !is_well_formed_email(&email) {
            return Err(reject(EMAIL_MALFORMED));
        }
        Ok(PersonFields {
            name,
            email,
            birth_date: self.birth_date,
            gender: self.gender,
            country_ref: self.country_ref,
            address: self.address,
            wants_newsletter: self.wants_newsletter,
        })
    }
}

impl Validate for PersonUpdateRequest {
    type Output = PersonFields;

    fn validate(self) -> Result<Self::Output, Violation> {
        // Same constraints, same order; the id plays no part in validation.
        PersonAddRequest {
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
            gender: self.gender,
            country_ref: self.country_ref,
            address: self.address,
            wants_newsletter: self.wants_newsletter,
        }
        .validate()
    }
}
