use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};

fn tag_strings(resource: &Value) -> Vec<&str> {
    resource
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| tags.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Tags shared by at least two resources, deduplicated and sorted.
///
/// A tag repeated on a single resource does not count as shared. Runs in
/// O(total tag count).
pub fn duplicate_tags(resources: &[Value]) -> Vec<String> {
    let mut seen_on: HashMap<&str, u32> = HashMap::new();
    for resource in resources {
        let distinct: HashSet<&str> = tag_strings(resource).into_iter().collect();
        for tag in distinct {
            *seen_on.entry(tag).or_insert(0) += 1;
        }
    }

    let mut shared: Vec<String> = seen_on
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(tag, _)| tag.to_string())
        .collect();
    shared.sort();
    shared
}

/// Sorted unique union of every resource's tags.
pub fn all_tags(resources: &[Value]) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for resource in resources {
        for tag in tag_strings(resource) {
            tags.insert(tag.to_string());
        }
    }

    tags.into_iter().collect()
}
