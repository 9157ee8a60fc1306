use roster_types::PersonView;

use crate::field::SearchField;

/// Keep the views whose selected field contains `search`, ignoring case.
///
/// With no field selected, or nothing to search for, the input comes
/// back unchanged: an unrecognized selector means "no filter", not an
/// error. A view with no value in the selected field always matches.
pub fn filter(
    views: Vec<PersonView>,
    field: Option<SearchField>,
    search: Option<&str>,
) -> Vec<PersonView> {
    let (Some(field), Some(search)) = (field, search) else {
        return views;
    };
    if search.is_empty() {
        return views;
    }

    let needle = search.to_lowercase();
    views
        .into_iter()
        .filter(|view| match field.text_of(view) {
            Some(text) => text.to_lowercase().contains(&needle),
            None => true,
        })
        .collect()
}
