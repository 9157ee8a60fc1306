//! Foundation types for the roster domain core.
//!
//! This crate provides the identifiers, entities, request payloads, and
//! read-side views shared by every other roster crate. It contains no
//! storage and no validation logic; those live in `roster-store` and
//! `roster-gate`.
//!
//! # Key Types
//!
//! - [`CountryId`] / [`PersonId`] — Store-generated opaque identifiers
//! - [`Country`] — Stored country record (doubles as its own snapshot)
//! - [`Person`] — Stored person record with a weak country reference
//! - [`PersonFields`] — Validated field bundle shared by add and update
//! - [`PersonView`] — Derived read-side projection (age, country name)
//! - [`Gender`] — Enumerated gender with case-insensitive parsing

pub mod country;
pub mod dates;
pub mod error;
pub mod gender;
pub mod id;
pub mod person;

pub use country::{Country, CountryAddRequest};
pub use dates::{age_on, format_day_month_year};
pub use error::TypeError;
pub use gender::Gender;
pub use id::{CountryId, PersonId};
pub use person::{Person, PersonAddRequest, PersonFields, PersonUpdateRequest, PersonView};
