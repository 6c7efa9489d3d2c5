use std::collections::HashSet;

use crate::entities::{
    Campaign, CategoryId, CategoryOption, FilterCriteria, Page, PageRequest, Record,
};

use super::pagination_slicer::paginate;

/// Filter, then slice the requested page.
pub fn project<R: Record>(
    records: Vec<R>,
    criteria: &FilterCriteria,
    request: PageRequest,
) -> Page<R> {
    paginate(criteria.filter_owned(records), request)
}

/// Categories present in the collection, in first-seen order.
pub fn distinct_categories<R: Record>(records: &[R]) -> Vec<CategoryId> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(Record::category)
        .filter(|c| seen.insert(*c))
        .cloned()
        .collect()
}

/// Builds selector options for the categories present in `records`. Labels
/// come from the campaign list when it names the category, then from
/// `fallback_label`, and finally from the identifier itself.
pub fn category_options<R, F>(
    records: &[R],
    campaigns: &[Campaign],
    fallback_label: F,
) -> Vec<CategoryOption>
where
    R: Record,
    F: Fn(&R) -> Option<String>,
{
    distinct_categories(records)
        .into_iter()
        .map(|id| {
            let label = campaigns
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
                .or_else(|| {
                    records
                        .iter()
                        .filter(|r| r.category() == &id)
                        .find_map(&fallback_label)
                })
                .unwrap_or_else(|| id.to_string());
            CategoryOption { id, label }
        })
        .collect()
}
