//! Quiz scoring: tolerant answer decoding, per-category accumulation and
//! normalization, and weighted major ranking.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::data::models::MajorWeights;
use crate::scoring::category::{Category, CategoryScores};

/// One major with its weighted score, as shown on the results page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedMajor {
    pub major: String,
    pub score: f64,
}

/// Converts raw quiz answers into integer percentages per category.
///
/// Each answer is expected to carry an `e` field holding a JSON-encoded
/// `[category, delta]` tuple. Anything that fails to decode — missing `e`,
/// invalid JSON, wrong arity, unknown category, non-finite delta — is
/// skipped silently; malformed input is tolerated, not rejected. The caller
/// decides separately whether the submission as a whole is valid.
pub fn compute_scores(answers: &[Value]) -> CategoryScores {
    let mut scores = CategoryScores::new();

    for answer in answers {
        if let Some((category, delta)) = decode_answer(answer) {
            scores.add(category, delta);
        }
    }

    for category in Category::ALL {
        let percentage = (scores.get(category) / category.base_score() * 100.0).round();
        scores.set(category, percentage);
    }

    scores
}

fn decode_answer(answer: &Value) -> Option<(Category, f64)> {
    let encoded = answer.get("e")?.as_str()?;
    let parsed: Value = serde_json::from_str(encoded).ok()?;
    let tuple = parsed.as_array()?;
    if tuple.len() != 2 {
        return None;
    }
    let category = Category::from_name(tuple[0].as_str()?)?;
    let delta = coerce_number(&tuple[1])?;
    Some((category, delta))
}

/// Accepts JSON numbers and numeric strings; rejects everything else and
/// anything non-finite.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Scores every major in the weight table against the user's per-category
/// percentages and returns them sorted descending.
///
/// `score = Σ_category scores[category] × weight[major][category]`, with a
/// missing weight reading as 0. The sort is stable, so equal scores keep
/// the weight table's file order.
pub fn rank_majors(scores: &CategoryScores, weights: &MajorWeights) -> Vec<RankedMajor> {
    let mut ranked: Vec<RankedMajor> = weights
        .majors()
        .map(|major| {
            let score = Category::ALL
                .iter()
                .map(|&c| scores.get(c) * weights.weight(major, c.as_str()))
                .sum();
            RankedMajor {
                major: major.to_string(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}
