//! Query engine for the roster domain core.
//!
//! Filtering and sorting of person views by a caller-chosen field. The
//! selectable fields are closed enums rather than free-form strings:
//! the transport parses selector names up front, and an unrecognized or
//! absent selector flows through the engine as `None`, which leaves the
//! sequence untouched instead of failing dynamically.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_query::SearchField;
//!
//! let field: Option<SearchField> = "name".parse().ok();
//! assert_eq!(field, Some(SearchField::Name));
//!
//! // Unrecognized selector names simply mean "no filter".
//! let unknown: Option<SearchField> = "shoe_size".parse().ok();
//! assert_eq!(unknown, None);
//! ```

pub mod error;
pub mod field;
pub mod filter;
pub mod sort;

// Re-exports for convenience.
pub use error::ParseFieldError;
pub use field::{SearchField, SortField, SortOrder};
pub use filter::filter;
pub use sort::sort;
