use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use tracing::debug;

use roster_gate::Validate;
use roster_query::{SearchField, SortField, SortOrder};
use roster_types::{Person, PersonAddRequest, PersonId, PersonUpdateRequest, PersonView};

use crate::clock::{system_clock, Clock};
use crate::country::CountryStore;
use crate::error::StoreError;
use crate::projection::project;

/// In-memory person store.
///
/// Persons are the mutable half of the roster. Every mutation passes the
/// validation gate before any state changes, and every read returns
/// freshly derived [`PersonView`]s: country names resolve through the
/// country store on each call, ages come from the injected clock. The
/// country store is used read-only and never calls back, so the two
/// locks cannot deadlock.
pub struct PersonStore {
    countries: Arc<CountryStore>,
    clock: Clock,
    inner: RwLock<PersonState>,
}

#[derive(Default)]
struct PersonState {
    persons: HashMap<PersonId, Person>,
    order: Vec<PersonId>,
}

impl PersonStore {
    /// Store over the given country reference data, deriving ages from
    /// the system calendar.
    pub fn new(countries: Arc<CountryStore>) -> Self {
        Self::with_clock(countries, system_clock())
    }

    /// Same store with an injected clock; tests pin the calendar here.
    pub fn with_clock(countries: Arc<CountryStore>, clock: Clock) -> Self {
        Self {
            countries,
            clock,
            inner: RwLock::new(PersonState::default()),
        }
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Validate and store a new person, returning the derived view.
    ///
    /// On any failure the store is left exactly as it was.
    pub fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> Result<PersonView, StoreError> {
        let request = request.ok_or(StoreError::MissingRequest)?;
        let fields = request.validate()?;
        let person = Person::new(PersonId::generate(), fields);

        {
            let mut state = self
                .inner
                .write()
                .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
            state.order.push(person.id);
            state.persons.insert(person.id, person.clone());
        }
        debug!(person_id = %person.id.short_id(), "person added");
        project(&person, &self.countries, self.today())
    }

    /// All persons as derived views, in insertion order.
    pub fn get_all(&self) -> Result<Vec<PersonView>, StoreError> {
        let persons: Vec<Person> = {
            let state = self
                .inner
                .read()
                .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
            state
                .order
                .iter()
                .filter_map(|id| state.persons.get(id).cloned())
                .collect()
        };

        let today = self.today();
        persons
            .iter()
            .map(|person| project(person, &self.countries, today))
            .collect()
    }

    /// Look up a person by id. An absent id or a miss is `Ok(None)`,
    /// never an error; a hit is a fully derived view.
    pub fn get_by_id(&self, id: Option<PersonId>) -> Result<Option<PersonView>, StoreError> {
        let Some(id) = id else {
            return Ok(None);
        };
        let person = {
            let state = self
                .inner
                .read()
                .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
            state.persons.get(&id).cloned()
        };
        match person {
            Some(person) => Ok(Some(project(&person, &self.countries, self.today())?)),
            None => Ok(None),
        }
    }

    /// All views whose selected field matches `search`.
    ///
    /// An absent or unrecognized selector, or an empty search, returns
    /// everyone.
    pub fn get_filtered(
        &self,
        field: Option<SearchField>,
        search: Option<&str>,
    ) -> Result<Vec<PersonView>, StoreError> {
        Ok(roster_query::filter(self.get_all()?, field, search))
    }

    /// Stable sort of a caller-provided listing.
    ///
    /// Pure with respect to the store: the sequence to sort comes in as
    /// an argument, typically the result of [`get_all`](Self::get_all)
    /// or [`get_filtered`](Self::get_filtered).
    pub fn get_sorted(
        &self,
        views: Vec<PersonView>,
        field: Option<SortField>,
        order: SortOrder,
    ) -> Vec<PersonView> {
        roster_query::sort(views, field, order)
    }

    /// Validate and apply an update, returning the refreshed view.
    ///
    /// The id must address a stored person; everything except the id is
    /// overwritten. On any failure no stored record is altered.
    pub fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> Result<PersonView, StoreError> {
        let request = request.ok_or(StoreError::MissingRequest)?;
        let id = request.id;
        let fields = request.validate()?;

        let person = {
            let mut state = self
                .inner
                .write()
                .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
            let person = state
                .persons
                .get_mut(&id)
                .ok_or(StoreError::PersonNotFound { id })?;
            person.apply(fields);
            person.clone()
        };
        debug!(person_id = %id.short_id(), "person updated");
        project(&person, &self.countries, self.today())
    }

    /// Remove a person. `Ok(true)` when a record was removed, `Ok(false)`
    /// when the id addressed nothing; calling without an id is an error.
    pub fn delete_person(&self, id: Option<PersonId>) -> Result<bool, StoreError> {
        let id = id.ok_or(StoreError::MissingPersonId)?;
        let mut state = self
            .inner
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        let removed = state.persons.remove(&id).is_some();
        if removed {
            state.order.retain(|existing| *existing != id);
            debug!(person_id = %id.short_id(), "person deleted");
        }
        Ok(removed)
    }
}
