use std::collections::HashSet;

use crate::models::Campsite;

/// Domain vocabulary offered alongside catalog-derived completions
pub const SUGGESTION_VOCABULARY: [&str; 12] = [
    "Northern Lights",
    "Aurora Viewing",
    "Mountain Camping",
    "Forest Retreat",
    "Coastal Camping",
    "Alpine Adventure",
    "Wilderness Experience",
    "Stargazing",
    "Hiking Trails",
    "Photography",
    "Wildlife Watching",
    "Hot Springs",
];

/// Minimum trimmed query length before any suggestion is produced; shorter
/// prefixes fan out too widely to be useful
pub const MIN_QUERY_LEN: usize = 2;

/// Up to `limit` distinct completions containing `partial` case-insensitively.
///
/// Candidates come from campsite names, countries and regions in catalog
/// order, then from [`SUGGESTION_VOCABULARY`]. Duplicates keep their first
/// position; no ranking beyond that.
pub fn suggest(partial: &str, catalog: &[Campsite], limit: usize) -> Vec<String> {
    let partial = partial.trim();
    if partial.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = partial.to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions: Vec<String> = Vec::new();
    let mut push = |candidate: &str| {
        if suggestions.len() >= limit {
            return;
        }
        if !candidate.to_lowercase().contains(&needle) {
            return;
        }
        if seen.insert(candidate.to_string()) {
            suggestions.push(candidate.to_string());
        }
    };

    for record in catalog {
        push(&record.name);
        push(&record.location.country);
        push(&record.location.region);
    }
    for term in SUGGESTION_VOCABULARY {
        push(term);
    }

    suggestions
}
