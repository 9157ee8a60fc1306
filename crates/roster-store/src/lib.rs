//! In-memory stores for the roster domain core.
//!
//! [`CountryStore`] holds reference data with unique names;
//! [`PersonStore`] holds the mutable person records and serves every
//! read as a freshly derived [`roster_types::PersonView`], resolving
//! country names through the country store and computing ages from an
//! injected clock. Mutations pass the validation gate before any state
//! changes; lookup and delete misses are ordinary values, not errors.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use roster_store::{CountryStore, PersonStore};
//! use roster_types::{CountryAddRequest, PersonAddRequest};
//!
//! let countries = Arc::new(CountryStore::new());
//! let kenya = countries
//!     .add_country(Some(CountryAddRequest::new("Kenya")))
//!     .unwrap();
//!
//! let persons = PersonStore::new(Arc::clone(&countries));
//! let view = persons
//!     .add_person(Some(PersonAddRequest {
//!         name: Some("Mary".into()),
//!         email: Some("mary@example.com".into()),
//!         country_ref: Some(kenya.id),
//!         ..PersonAddRequest::default()
//!     }))
//!     .unwrap();
//! assert_eq!(view.country_name.as_deref(), Some("Kenya"));
//! ```

pub mod clock;
pub mod country;
pub mod error;
pub mod person;
pub mod projection;

// Re-exports for convenience.
pub use clock::{fixed_clock, system_clock, Clock};
pub use country::CountryStore;
pub use error::StoreError;
pub use person::PersonStore;
pub use projection::project;
