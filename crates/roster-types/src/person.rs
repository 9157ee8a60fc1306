use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::format_day_month_year;
use crate::gender::Gender;
use crate::id::{CountryId, PersonId};

/// A person record as held in the store.
///
/// Name and email are guaranteed present because every record is built
/// from [`PersonFields`], which only the validation gate produces. The
/// country is a weak reference: just an identifier, resolved to a name
/// at read time and never required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_ref: Option<CountryId>,
    pub address: Option<String>,
    pub wants_newsletter: bool,
}

impl Person {
    /// Build a record from validated fields under a freshly assigned id.
    pub fn new(id: PersonId, fields: PersonFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            birth_date: fields.birth_date,
            gender: fields.gender,
            country_ref: fields.country_ref,
            address: fields.address,
            wants_newsletter: fields.wants_newsletter,
        }
    }

    /// Overwrite every field except the identifier.
    pub fn apply(&mut self, fields: PersonFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.birth_date = fields.birth_date;
        self.gender = fields.gender;
        self.country_ref = fields.country_ref;
        self.address = fields.address;
        self.wants_newsletter = fields.wants_newsletter;
    }
}

/// Validated person fields, produced by the validation gate.
///
/// The required fields are plain `String`s here: once a request has
/// passed validation there is no absent case left to represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_ref: Option<CountryId>,
    pub address: Option<String>,
    pub wants_newsletter: bool,
}

/// Request to add a person.
///
/// Everything the caller supplies is optional at the type level; the
/// validation gate decides which absences are violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAddRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_ref: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub wants_newsletter: bool,
}

/// Request to replace the fields of an existing person.
///
/// Identifies the record by id; the remaining fields follow the same
/// rules as [`PersonAddRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
    pub id: PersonId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_ref: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub wants_newsletter: bool,
}

/// Read-side projection of a person.
///
/// Carries the stored fields plus two derived ones: the age in whole
/// years as of the store's clock, and the resolved country name. Both
/// are recomputed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_ref: Option<CountryId>,
    pub country_name: Option<String>,
    pub address: Option<String>,
    pub wants_newsletter: bool,
    pub age: Option<i64>,
}

impl PersonView {
    /// The birth date rendered as `dd Mon yyyy`, if one is recorded.
    pub fn birth_date_text(&self) -> Option<String> {
        self.birth_date.map(format_day_month_year)
    }

    /// Turn this view back into an update request carrying the same
    /// field values, ready for the caller to edit and submit.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            id: self.id,
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            birth_date: self.birth_date,
            gender: self.gender,
            country_ref: self.country_ref,
            address: self.address.clone(),
            wants_newsletter: self.wants_newsletter,
        }
    }
}

impl fmt::Display for PersonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)?;
        if let Some(age) = self.age {
            write!(f, ", age {age}")?;
        }
        if let Some(country) = &self.country_name {
            write!(f, ", {country}")?;
        }
        Ok(())
    }
}
