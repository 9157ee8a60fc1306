use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use roster_types::PersonView;

use crate::error::ParseFieldError;

/// Fields a person listing can be searched on.
///
/// A closed set: the transport parses caller-supplied selector names
/// with `FromStr` and passes `None` for anything unrecognized, which
/// downstream means "no filter" rather than a dynamic dispatch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Email,
    BirthDate,
    Address,
    Gender,
    CountryName,
}

impl SearchField {
    /// The text form of the selected field on a view, if the view has one.
    ///
    /// Birth dates render as `dd Mon yyyy`; genders as their display word.
    pub fn text_of(&self, view: &PersonView) -> Option<String> {
        match self {
            SearchField::Name => Some(view.name.clone()),
            SearchField::Email => Some(view.email.clone()),
            SearchField::BirthDate => view.birth_date_text(),
            SearchField::Address => view.address.clone(),
            SearchField::Gender => view.gender.map(|g| g.to_string()),
            SearchField::CountryName => view.country_name.clone(),
        }
    }
}

impl FromStr for SearchField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "email" => Ok(SearchField::Email),
            "birth_date" => Ok(SearchField::BirthDate),
            "address" => Ok(SearchField::Address),
            "gender" => Ok(SearchField::Gender),
            "country_name" => Ok(SearchField::CountryName),
            _ => Err(ParseFieldError::UnknownSearchField(s.to_string())),
        }
    }
}

/// Fields a person listing can be ordered by.
///
/// Text fields compare case-insensitively with absent values first in
/// ascending order; dates, ages, and flags compare naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Email,
    BirthDate,
    Age,
    Address,
    Gender,
    CountryName,
    WantsNewsletter,
}

impl SortField {
    /// Ascending ordering of two views under this field.
    pub fn compare(&self, a: &PersonView, b: &PersonView) -> Ordering {
        match self {
            SortField::Name => fold(&a.name).cmp(&fold(&b.name)),
            SortField::Email => fold(&a.email).cmp(&fold(&b.email)),
            SortField::BirthDate => a.birth_date.cmp(&b.birth_date),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Address => fold_opt(&a.address).cmp(&fold_opt(&b.address)),
            SortField::Gender => gender_key(a).cmp(&gender_key(b)),
            SortField::CountryName => {
                fold_opt(&a.country_name).cmp(&fold_opt(&b.country_name))
            }
            SortField::WantsNewsletter => a.wants_newsletter.cmp(&b.wants_newsletter),
        }
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}

fn fold_opt(text: &Option<String>) -> Option<String> {
    text.as_deref().map(fold)
}

// Genders order by their rendered word, so Female < Male < Other.
fn gender_key(view: &PersonView) -> Option<String> {
    view.gender.map(|g| fold(g.as_str()))
}

impl FromStr for SortField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "email" => Ok(SortField::Email),
            "birth_date" => Ok(SortField::BirthDate),
            "age" => Ok(SortField::Age),
            "address" => Ok(SortField::Address),
            "gender" => Ok(SortField::Gender),
            "country_name" => Ok(SortField::CountryName),
            "wants_newsletter" => Ok(SortField::WantsNewsletter),
            _ => Err(ParseFieldError::UnknownSortField(s.to_string())),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Apply the direction to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseFieldError::UnknownSortOrder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_types::{Gender, PersonId};

    fn bare_view(name: &str) -> PersonView {
        PersonView {
            id: PersonId::generate(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            birth_date: None,
            gender: None,
            country_ref: None,
            country_name: None,
            address: None,
            wants_newsletter: false,
            age: None,
        }
    }

    #[test]
    fn search_field_names_parse() {
        for (text, field) in [
            ("name", SearchField::Name),
            ("email", SearchField::Email),
            ("birth_date", SearchField::BirthDate),
            ("address", SearchField::Address),
            ("gender", SearchField::Gender),
            ("country_name", SearchField::CountryName),
        ] {
            assert_eq!(text.parse::<SearchField>().unwrap(), field);
        }
        assert_eq!("NAME".parse::<SearchField>().unwrap(), SearchField::Name);
    }

    #[test]
    fn unknown_selector_names_are_errors() {
        assert!(matches!(
            "person_id".parse::<SearchField>(),
            Err(ParseFieldError::UnknownSearchField(_))
        ));
        assert!(matches!(
            "shoe_size".parse::<SortField>(),
            Err(ParseFieldError::UnknownSortField(_))
        ));
        assert!(matches!(
            "sideways".parse::<SortOrder>(),
            Err(ParseFieldError::UnknownSortOrder(_))
        ));
    }

    #[test]
    fn sort_order_accepts_short_names() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
    }

    #[test]
    fn extractor_renders_birth_date_as_text() {
        let mut view = bare_view("Mary");
        view.birth_date = NaiveDate::from_ymd_opt(2000, 3, 5);
        assert_eq!(
            SearchField::BirthDate.text_of(&view).as_deref(),
            Some("05 Mar 2000")
        );
    }

    #[test]
    fn extractor_returns_none_for_absent_fields() {
        let view = bare_view("Mary");
        assert_eq!(SearchField::BirthDate.text_of(&view), None);
        assert_eq!(SearchField::Address.text_of(&view), None);
        assert_eq!(SearchField::Gender.text_of(&view), None);
        assert_eq!(SearchField::CountryName.text_of(&view), None);
        assert_eq!(SearchField::Name.text_of(&view).as_deref(), Some("Mary"));
    }

    #[test]
    fn gender_orders_by_rendered_word() {
        let mut female = bare_view("a");
        female.gender = Some(Gender::Female);
        let mut male = bare_view("b");
        male.gender = Some(Gender::Male);
        let mut other = bare_view("c");
        other.gender = Some(Gender::Other);

        assert_eq!(SortField::Gender.compare(&female, &male), Ordering::Less);
        assert_eq!(SortField::Gender.compare(&male, &other), Ordering::Less);
    }

    #[test]
    fn text_comparison_ignores_case() {
        let upper = bare_view("MARY");
        let lower = bare_view("mary");
        assert_eq!(SortField::Name.compare(&upper, &lower), Ordering::Equal);
    }

    #[test]
    fn absent_text_orders_before_present() {
        let without = bare_view("a");
        let mut with = bare_view("b");
        with.address = Some("12 Hill Road".into());
        assert_eq!(SortField::Address.compare(&without, &with), Ordering::Less);
    }

    #[test]
    fn descending_reverses_comparisons() {
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn selector_serde_names_are_snake_case() {
        let json = serde_json::to_string(&SearchField::CountryName).unwrap();
        assert_eq!(json, "\"country_name\"");
        let parsed: SortField = serde_json::from_str("\"wants_newsletter\"").unwrap();
        assert_eq!(parsed, SortField::WantsNewsletter);
    }
}
