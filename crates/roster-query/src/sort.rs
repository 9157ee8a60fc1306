use roster_types::PersonView;

use crate::field::{SortField, SortOrder};

/// Stable sort of `views` by the selected field.
///
/// No selected field returns the input unchanged, element for element.
/// Descending reverses the comparator rather than the sorted sequence,
/// so views with equal keys keep their input order in both directions.
pub fn sort(
    mut views: Vec<PersonView>,
    field: Option<SortField>,
    order: SortOrder,
) -> Vec<PersonView> {
    let Some(field) = field else {
        return views;
    };
    views.sort_by(|a, b| order.apply(field.compare(a, b)));
    views
}
