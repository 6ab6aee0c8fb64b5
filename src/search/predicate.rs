use crate::models::Campsite;
use crate::search::criteria::FilterCriteria;

/// Decide whether a single record matches the free-text query and the
/// structured criteria.
///
/// Pure and total: reads immutable inputs only, never fails, safe to call
/// from any thread. Sub-checks short-circuit on the first failure.
pub fn matches(record: &Campsite, query: &str, criteria: &FilterCriteria) -> bool {
    matches_query(record, query) && matches_criteria(record, criteria)
}

/// Case-insensitive substring match against name, country, region and
/// description; an empty or whitespace-only query matches everything
fn matches_query(record: &Campsite, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    record.name.to_lowercase().contains(&query)
        || record.location.country.to_lowercase().contains(&query)
        || record.location.region.to_lowercase().contains(&query)
        || record.description.to_lowercase().contains(&query)
}

/// Every set criteria field must pass; unset fields impose no constraint
fn matches_criteria(record: &Campsite, criteria: &FilterCriteria) -> bool {
    if let Some(country) = &criteria.country {
        if record.location.country.to_lowercase() != country.to_lowercase() {
            return false;
        }
    }
    if let Some(difficulty) = criteria.difficulty {
        if record.difficulty != difficulty {
            return false;
        }
    }
    if let Some((min, max)) = criteria.price_range {
        if record.price_per_night < min || record.price_per_night > max {
            return false;
        }
    }
    if let Some(minimum) = criteria.capacity {
        if record.capacity < minimum {
            return false;
        }
    }
    if let Some(required) = &criteria.amenities {
        if !required.iter().all(|tag| record.amenities.contains(tag)) {
            return false;
        }
    }
    true
}

/// Filter the catalog against `(query, criteria)`, preserving catalog order.
/// Ordering beyond that (by rating, price, ...) is a presentation concern.
pub fn filter_catalog(
    catalog: &[Campsite],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<Campsite> {
    catalog
        .iter()
        .filter(|record| matches(record, query, criteria))
        .cloned()
        .collect()
}
