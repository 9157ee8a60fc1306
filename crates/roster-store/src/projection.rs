use chrono::NaiveDate;

use roster_types::{age_on, Person, PersonView};

use crate::country::CountryStore;
use crate::error::StoreError;

/// Materialize the read-side view of a person as of `today`.
///
/// The country name is resolved through the country store and tolerates
/// a dangling or absent reference; the age comes from the birth date
/// alone. Every read path derives afresh, nothing is memoized.
pub fn project(
    person: &Person,
    countries: &CountryStore,
    today: NaiveDate,
) -> Result<PersonView, StoreError> {
    let country = countries.get_by_id(person.country_ref)?;
    Ok(PersonView {
        id: person.id,
        name: person.name.clone(),
        email: person.email.clone(),
        birth_date: person.birth_date,
        gender: person.gender,
        country_ref: person.country_ref,
        country_name: country.map(|c| c.name),
        address: person.address.clone(),
        wants_newsletter: person.wants_newsletter,
        age: person.birth_date.map(|b| age_on(b, today)),
    })
}
