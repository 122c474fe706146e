#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One field of study from `subfield_datas.json`.
///
/// `subfields` and `way2place` hold title strings referencing other records
/// in the same file — references, not ownership. Dangling references are
/// legal and handled at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubfieldRecord {
    pub title: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default, rename = "shortIntroduction")]
    pub short_introduction: String,
    #[serde(default)]
    pub subfields: Vec<String>,
    /// Root-to-node path through the field hierarchy, ending at this record.
    #[serde(default)]
    pub way2place: Vec<String>,
}

/// The major → category → weight table from `majors_scores.json`.
///
/// Kept as a raw JSON object so iteration follows file order (serde_json's
/// `preserve_order` feature); the ranking stage relies on that order to
/// break score ties deterministically. Weight reads are lenient: a missing
/// major, missing category, or non-numeric value counts as 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct MajorWeights(Map<String, Value>);

impl MajorWeights {
    pub fn majors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn weight(&self, major: &str, category: &str) -> f64 {
        self.0
            .get(major)
            .and_then(|row| row.get(category))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subfield_record_full() {
        let record: SubfieldRecord = serde_json::from_value(json!({
            "title": "Artificial Intelligence",
            "introduction": "Machines that learn.",
            "shortIntroduction": "Learning machines.",
            "subfields": ["Machine Learning"],
            "way2place": ["Computer Science", "Artificial Intelligence"]
        }))
        .unwrap();
        assert_eq!(record.title, "Artificial Intelligence");
        assert_eq!(record.short_introduction, "Learning machines.");
        assert_eq!(record.way2place.len(), 2);
    }

    #[test]
    fn test_subfield_record_defaults() {
        let record: SubfieldRecord =
            serde_json::from_value(json!({ "title": "Bare" })).unwrap();
        assert_eq!(record.introduction, "");
        assert_eq!(record.short_introduction, "");
        assert!(record.subfields.is_empty());
        assert!(record.way2place.is_empty());
    }

    #[test]
    fn test_subfield_record_ignores_unknown_fields() {
        let record: SubfieldRecord = serde_json::from_value(json!({
            "title": "Extra",
            "legacy_field": 42
        }))
        .unwrap();
        assert_eq!(record.title, "Extra");
    }

    #[test]
    fn test_weights_preserve_file_order() {
        let weights: MajorWeights = serde_json::from_str(
            r#"{ "Zoology": {"Data": 1}, "Art": {"Data": 2}, "Math": {"Data": 3} }"#,
        )
        .unwrap();
        let order: Vec<&str> = weights.majors().collect();
        assert_eq!(order, vec!["Zoology", "Art", "Math"]);
    }

    #[test]
    fn test_weight_lenient_reads() {
        let weights: MajorWeights = serde_json::from_value(json!({
            "Data Science": { "Data": 0.9, "AI": "not a number" }
        }))
        .unwrap();
        assert_eq!(weights.weight("Data Science", "Data"), 0.9);
        assert_eq!(weights.weight("Data Science", "AI"), 0.0);
        assert_eq!(weights.weight("Data Science", "Creative"), 0.0);
        assert_eq!(weights.weight("No Such Major", "Data"), 0.0);
    }
}
