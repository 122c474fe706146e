//! Field lookup over the subfield dataset: resolves a field's page view and
//! batch description lookups for the results page.

use serde::Serialize;

use crate::data::models::SubfieldRecord;

/// Substituted when a listed subfield has no record of its own.
pub const NO_INFO_PLACEHOLDER: &str = "(No information found)";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubfieldSummary {
    pub title: String,
    pub short_introduction: String,
}

/// Everything the majors page needs for one field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub title: String,
    pub introduction: String,
    /// Logical parent taken from the record's root-to-node path: the
    /// second-to-last entry when the path has two or more steps, the sole
    /// entry when it has exactly one, absent otherwise.
    pub top_subfield: Option<String>,
    pub subfields: Vec<SubfieldSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MajorDescription {
    pub title: String,
    pub description: String,
}

/// Looks up a field by exact title and assembles its page view.
///
/// Returns `None` when the title has no record. Dangling subfield
/// references never fail the lookup; they get a placeholder description.
pub fn get_field_info(records: &[SubfieldRecord], title: &str) -> Option<FieldView> {
    let main = records.iter().find(|r| r.title == title)?;

    let top_subfield = match main.way2place.len() {
        0 => None,
        1 => main.way2place.first().cloned(),
        n => main.way2place.get(n - 2).cloned(),
    };

    let subfields = main
        .subfields
        .iter()
        .map(|sub_title| match records.iter().find(|r| &r.title == sub_title) {
            Some(sub) => SubfieldSummary {
                title: sub.title.clone(),
                short_introduction: sub.short_introduction.clone(),
            },
            None => SubfieldSummary {
                title: sub_title.clone(),
                short_introduction: NO_INFO_PLACEHOLDER.to_string(),
            },
        })
        .collect();

    Some(FieldView {
        title: main.title.clone(),
        introduction: main.introduction.clone(),
        top_subfield,
        subfields,
    })
}

/// Resolves each title to its full introduction, preserving input order and
/// silently dropping titles with no record. First match wins if the data
/// contains duplicate titles.
pub fn get_descriptions(records: &[SubfieldRecord], titles: &[String]) -> Vec<MajorDescription> {
    titles
        .iter()
        .filter_map(|title| {
            records.iter().find(|r| &r.title == title).map(|r| MajorDescription {
                title: r.title.clone(),
                description: r.introduction.clone(),
            })
        })
        .collect()
}
