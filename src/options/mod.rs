//! Per-field option sets and UI configuration for the perspective
//! create/edit surface.

use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

const SUBJECTS_KEY: &str = "subjects";
const LENSES_KEY: &str = "lenses";
const FILTER_SUFFIX: &str = "Filter";

/// Subject as projected into the picker: its absolute path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRef {
    pub absolute_path: String,
}

/// Lens as projected into the picker.
#[derive(Debug, Clone, Deserialize)]
pub struct LensRef {
    pub name: String,
}

/// Everything the deriver can draw options from, keyed the way the edit
/// modal keys its fields.
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    pub subjects: Vec<SubjectRef>,
    pub lenses: Vec<LensRef>,

    /// String-valued fields (`aspectFilter`, `aspectTagFilter`,
    /// `subjectTagFilter`, `statusFilter`, ...).
    pub fields: HashMap<String, Vec<String>>,
}

/// Current selection for a field: scalar for subjects/lenses, list for the
/// filter families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    One(String),
    Many(Vec<String>),
}

impl Selection {
    fn excluded(&self) -> &[String] {
        match self {
            Selection::One(value) => std::slice::from_ref(value),
            Selection::Many(values) => values,
        }
    }
}

/// Search behavior attached to a field instead of a bare callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUpFilter {
    /// Case-insensitive prefix match on the segment after the last `.` of
    /// each option (the subject's own name within its absolute path).
    SubjectNamePrefix,
}

impl KeyUpFilter {
    pub fn apply(&self, options: &[String], search: &str) -> Vec<String> {
        match self {
            KeyUpFilter::SubjectNamePrefix => {
                let needle = search.to_uppercase();
                options
                    .iter()
                    .filter(|option| {
                        let name = match option.rfind('.') {
                            Some(dot) => &option[dot + 1..],
                            None => option.as_str(),
                        };
                        name.to_uppercase().starts_with(&needle)
                    })
                    .cloned()
                    .collect()
            }
        }
    }
}

/// Derived, read-only configuration for one filterable field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    pub title: String,
    pub options: Vec<String>,
    pub placeholder_text: Option<String>,
    pub all_options_label: Option<String>,
    pub default_value: Option<String>,
    pub is_array: bool,
    pub not_open_on_focus: bool,
    pub key_up_filter: Option<KeyUpFilter>,
}

/// Residual options: everything in `options` not currently selected, in
/// reverse input order. Consumers rely on most-recently-added-first, so the
/// ordering is part of the contract.
pub fn residual_options(options: &[String], excluded: &[String]) -> Vec<String> {
    let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
    options
        .iter()
        .rev()
        .filter(|option| !excluded.contains(option.as_str()))
        .cloned()
        .collect()
}

/// `'thisStringIsGood'` -> `'This String Is Good'`.
fn humanize(key: &str) -> String {
    let spaced = match Regex::new("([A-Z])") {
        Ok(re) => re.replace_all(key, " $1").into_owned(),
        Err(_) => key.to_string(),
    };
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn non_excluded(options: impl Iterator<Item = String>, excluded: &[String]) -> Vec<String> {
    let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
    options
        .filter(|option| !option.is_empty() && !excluded.contains(option.as_str()))
        .collect()
}

/// Build the UI configuration for `key` given the full catalog and the
/// current selection.
pub fn field_config(catalog: &FieldCatalog, key: &str, current: &Selection) -> FieldConfig {
    let raw = catalog.fields.get(key).map(Vec::as_slice).unwrap_or(&[]);

    let mut config = FieldConfig {
        title: key.to_string(),
        options: residual_options(raw, current.excluded()),
        ..FieldConfig::default()
    };

    if key == SUBJECTS_KEY {
        config.placeholder_text = Some("Enter a subject name".to_string());
        config.options = non_excluded(
            catalog.subjects.iter().map(|s| s.absolute_path.clone()),
            current.excluded(),
        );
        config.is_array = false;
        config.not_open_on_focus = true;
        config.key_up_filter = Some(KeyUpFilter::SubjectNamePrefix);
    } else if key == LENSES_KEY {
        config.placeholder_text = Some("Select a Lens...".to_string());
        config.options = non_excluded(
            catalog.lenses.iter().map(|l| l.name.clone()),
            current.excluded(),
        );
        config.is_array = false;
    } else if key.ends_with(FILTER_SUFFIX) {
        // Pills, not free text.
        config.default_value = Some(String::new());
        config.is_array = true;

        let stem = humanize(key).replace(" Filter", "");
        let suffix = if key == "statusFilter" { "es" } else { "s" };
        config.all_options_label = Some(format!("All {stem}{suffix}"));

        if key == "aspectFilter" {
            // Aspect options come from the raw tag list, not the residual.
            config.options = non_excluded(raw.iter().cloned(), current.excluded());
        }
    }

    config
}
