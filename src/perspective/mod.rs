mod query;
mod tags;

pub use query::filter_query;
pub use tags::{all_tags, duplicate_tags};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Include/exclude mode for one filter family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterType {
    #[default]
    Include,
    Exclude,
}

/// A named, filterable view over a subject hierarchy plus its lens.
///
/// Immutable input to query serialization; the core never mutates one.
/// Filter fields default so partial server payloads still deserialize.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    pub name: String,

    /// Absolute path of the subject the hierarchy is rooted at.
    pub root_subject: String,

    pub lens_id: String,

    #[serde(default)]
    pub aspect_filter: Vec<String>,

    #[serde(default)]
    pub aspect_filter_type: FilterType,

    #[serde(default)]
    pub aspect_tag_filter: Vec<String>,

    #[serde(default)]
    pub aspect_tag_filter_type: FilterType,

    #[serde(default)]
    pub subject_tag_filter: Vec<String>,

    #[serde(default)]
    pub subject_tag_filter_type: FilterType,

    #[serde(default)]
    pub status_filter: Vec<String>,

    #[serde(default)]
    pub status_filter_type: FilterType,
}

/// Accumulator for one resolution run.
///
/// Owned and written by exactly one in-flight [`crate::resolver::Resolver`]
/// call, then handed to the caller; never shared across concurrent runs, so
/// no locking is involved.
#[derive(Debug, Default)]
pub struct ResolvedPerspective {
    /// Name of the loaded perspective, empty until one is found.
    pub name: String,

    /// Full catalog, in server order, for the picker and edit modal.
    pub perspectives: Vec<Perspective>,

    /// The perspective being loaded, if one was found.
    pub perspective: Option<Perspective>,

    /// Catalog names, sorted.
    pub perspective_names: Vec<String>,

    /// Hierarchy payload rooted at the perspective's root subject.
    pub root_subject: Value,

    /// Lens payload, including its library bundle.
    pub lens: Value,

    /// Default status filter: every known status name, sorted.
    pub status_filter: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_perspective() {
        let json = r#"{
            "name": "prod-view",
            "rootSubject": "NA.Canada",
            "lensId": "l1",
            "statusFilter": ["OK", "Info"],
            "statusFilterType": "EXCLUDE"
        }"#;

        let p: Perspective = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "prod-view");
        assert_eq!(p.root_subject, "NA.Canada");
        assert_eq!(p.lens_id, "l1");
        assert_eq!(p.status_filter, vec!["OK", "Info"]);
        assert_eq!(p.status_filter_type, FilterType::Exclude);
        // Omitted families default to empty include filters.
        assert!(p.aspect_filter.is_empty());
        assert_eq!(p.aspect_filter_type, FilterType::Include);
    }

    #[test]
    fn test_filter_type_wire_names() {
        let include: FilterType = serde_json::from_str("\"INCLUDE\"").unwrap();
        let exclude: FilterType = serde_json::from_str("\"EXCLUDE\"").unwrap();
        assert_eq!(include, FilterType::Include);
        assert_eq!(exclude, FilterType::Exclude);
    }
}
