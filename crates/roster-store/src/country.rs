use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use roster_gate::Validate;
use roster_types::{Country, CountryAddRequest, CountryId};

use crate::error::StoreError;

/// In-memory country store.
///
/// Countries are reference data: added once, looked up when projecting
/// person views, never updated or deleted. Names are unique by exact
/// string equality. All data lives behind a single `RwLock`; readers
/// receive owned clones and can never alias store internals.
pub struct CountryStore {
    inner: RwLock<CountryState>,
}

#[derive(Default)]
struct CountryState {
    countries: HashMap<CountryId, Country>,
    order: Vec<CountryId>,
}

impl CountryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CountryState::default()),
        }
    }

    /// Validate and store a new country, returning it with its assigned id.
    ///
    /// On any failure the store is left exactly as it was.
    pub fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> Result<Country, StoreError> {
        let request = request.ok_or(StoreError::MissingRequest)?;
        let name = request.validate()?;

        let mut state = self
            .inner
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        if state.countries.values().any(|c| c.name == name) {
            return Err(StoreError::DuplicateCountryName { name });
        }

        let country = Country {
            id: CountryId::generate(),
            name,
        };
        state.order.push(country.id);
        state.countries.insert(country.id, country.clone());
        debug!(country_id = %country.id.short_id(), name = %country.name, "country added");
        Ok(country)
    }

    /// All countries as an insertion-order snapshot.
    pub fn get_all(&self) -> Result<Vec<Country>, StoreError> {
        let state = self
            .inner
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.countries.get(id).cloned())
            .collect())
    }

    /// Look up a country by id. An absent id or a miss is `Ok(None)`,
    /// never an error.
    pub fn get_by_id(&self, id: Option<CountryId>) -> Result<Option<Country>, StoreError> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = self
            .inner
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(state.countries.get(&id).cloned())
    }
}

impl Default for CountryStore {
    fn default() -> Self {
        Self::new()
    }
}
