use serde::{Deserialize, Serialize};

use crate::id::CountryId;

/// A country known to the roster.
///
/// Countries are reference data: created once, looked up by identifier
/// when projecting person views, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

/// Request to add a country.
///
/// The name is optional at the type level so that an absent value can be
/// reported as a validation failure rather than a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAddRequest {
    pub name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
