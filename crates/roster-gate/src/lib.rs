//! Validation gate for the roster domain core.
//!
//! Every mutation request must pass through the gate before a store will
//! touch it. The gate checks each request's declared constraints in
//! order and reports the first violation; a request that passes is
//! consumed into its validated payload, so downstream code never
//! re-checks what has already been proven.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_gate::Validate;
//! use roster_types::PersonAddRequest;
//!
//! let request = PersonAddRequest {
//!     name: Some("Mary".into()),
//!     email: Some("mary@example.com".into()),
//!     ..PersonAddRequest::default()
//! };
//! let fields = request.validate().unwrap();
//! assert_eq!(fields.name, "Mary");
//! ```

pub mod email;
pub mod error;
pub mod validate;

// Re-exports for convenience.
pub use email::is_well_formed_email;
pub use error::Violation;
pub use validate::Validate;

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::{
        CountryAddRequest, CountryId, Gender, PersonAddRequest, PersonId, PersonUpdateRequest,
    };

    /// Helper: a request that satisfies every constraint.
    fn valid_add_request() -> PersonAddRequest {
        PersonAddRequest {
            name: Some("Mary".into()),
            email: Some("mary@example.com".into()),
            ..PersonAddRequest::default()
        }
    }

    /// Helper: an update request with the same field values.
    fn valid_update_request() -> PersonUpdateRequest {
        PersonUpdateRequest {
            id: PersonId::generate(),
            name: Some("Mary".into()),
            email: Some("mary@example.com".into()),
            birth_date: None,
            gender: None,
            country_ref: None,
            address: None,
            wants_newsletter: false,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Valid person requests pass and yield their fields
    // -----------------------------------------------------------------------
    #[test]
    fn valid_person_request_passes() {
        let fields = valid_add_request().validate().unwrap();
        assert_eq!(fields.name, "Mary");
        assert_eq!(fields.email, "mary@example.com");
    }

    // -----------------------------------------------------------------------
    // 2. Missing person name is the first violation
    // -----------------------------------------------------------------------
    #[test]
    fn missing_person_name_rejected() {
        let mut request = valid_add_request();
        request.name = None;
        let violation = request.validate().unwrap_err();
        assert_eq!(violation.field, "name");
        assert_eq!(violation.to_string(), "person name must be provided");
    }

    // -----------------------------------------------------------------------
    // 3. Whitespace-only name counts as absent
    // -----------------------------------------------------------------------
    #[test]
    fn blank_person_name_rejected() {
        let mut request = valid_add_request();
        request.name = Some("   \t ".into());
        let violation = request.validate().unwrap_err();
        assert_eq!(violation.to_string(), "person name must be provided");
    }

    // -----------------------------------------------------------------------
    // 4. Missing email
    // -----------------------------------------------------------------------
    #[test]
    fn missing_email_rejected() {
        let mut request = valid_add_request();
        request.email = None;
        let violation = request.validate().unwrap_err();
        assert_eq!(violation.field, "email");
        assert_eq!(violation.to_string(), "email must be provided");
    }

    // -----------------------------------------------------------------------
    // 5. Malformed email
    // -----------------------------------------------------------------------
    #[test]
    fn malformed_email_rejected() {
        let mut request = valid_add_request();
        request.email = Some("not-an-address".into());
        let violation = request.validate().unwrap_err();
        assert_eq!(violation.to_string(), "email must be a valid email address");
    }

    // -----------------------------------------------------------------------
    // 6. First violation wins: name is checked before email
    // -----------------------------------------------------------------------
    #[test]
    fn first_violation_wins() {
        let request = PersonAddRequest::default(); // everything absent
        let violation = request.validate().unwrap_err();
        assert_eq!(violation.to_string(), "person name must be provided");
    }

    // -----------------------------------------------------------------------
    // 7. Email presence is checked before email shape
    // -----------------------------------------------------------------------
    #[test]
    fn email_presence_before_shape() {
        let mut request = valid_add_request();
        request.email = Some("  ".into());
        let violation = request.validate().unwrap_err();
        assert_eq!(violation.to_string(), "email must be provided");
    }

    // -----------------------------------------------------------------------
    // 8. Update requests share the person constraints
    // -----------------------------------------------------------------------
    #[test]
    fn update_request_shares_constraints() {
        let mut request = valid_update_request();
        request.email = Some("broken@@example.com".into());
        let violation = request.validate().unwrap_err();
        assert_eq!(violation.to_string(), "email must be a valid email address");

        let fields = valid_update_request().validate().unwrap();
        assert_eq!(fields.name, "Mary");
    }

    // -----------------------------------------------------------------------
    // 9. Optional fields pass through untouched
    // -----------------------------------------------------------------------
    #[test]
    fn optional_fields_pass_through() {
        let country = CountryId::generate();
        let birth_date = chrono::NaiveDate::from_ymd_opt(1990, 1, 15);
        let request = PersonAddRequest {
            name: Some("Mary".into()),
            email: Some("mary@example.com".into()),
            birth_date,
            gender: Some(Gender::Female),
            country_ref: Some(country),
            address: Some("12 Hill Road".into()),
            wants_newsletter: true,
        };

        let fields = request.validate().unwrap();
        assert_eq!(fields.birth_date, birth_date);
        assert_eq!(fields.gender, Some(Gender::Female));
        assert_eq!(fields.country_ref, Some(country));
        assert_eq!(fields.address.as_deref(), Some("12 Hill Road"));
        assert!(fields.wants_newsletter);
    }

    // -----------------------------------------------------------------------
    // 10. Surrounding whitespace is preserved, only blankness is checked
    // -----------------------------------------------------------------------
    #[test]
    fn surrounding_whitespace_preserved() {
        let mut request = valid_add_request();
        request.name = Some("  Mary  ".into());
        let fields = request.validate().unwrap();
        assert_eq!(fields.name, "  Mary  ");
    }

    // -----------------------------------------------------------------------
    // 11. Country requests: valid name passes
    // -----------------------------------------------------------------------
    #[test]
    fn valid_country_request_passes() {
        let name = CountryAddRequest::new("Kenya").validate().unwrap();
        assert_eq!(name, "Kenya");
    }

    // -----------------------------------------------------------------------
    // 12. Country requests: absent or blank name is rejected
    // -----------------------------------------------------------------------
    #[test]
    fn missing_country_name_rejected() {
        let violation = CountryAddRequest::default().validate().unwrap_err();
        assert_eq!(violation.to_string(), "country name must be provided");

        let violation = CountryAddRequest::new("   ").validate().unwrap_err();
        assert_eq!(violation.field, "name");
    }
}
