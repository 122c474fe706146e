//! Page handlers. Each request re-reads the reference data it needs,
//! processes in memory, and renders a template; no state survives the
//! response.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use minijinja::context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::store::Locale;
use crate::errors::AppError;
use crate::fields::{get_descriptions, get_field_info};
use crate::render;
use crate::scoring::category::{Category, CategoryScores};
use crate::scoring::engine::{compute_scores, rank_majors};
use crate::state::AppState;

const DEFAULT_FIELD: &str = "Computer Science";
/// Only the top-ranked majors make the results page.
const MAX_SUGGESTIONS: usize = 15;

/// GET /
pub async fn index_page() -> Result<Response, AppError> {
    Ok(render::page("index.html", context! {})?.into_response())
}

#[derive(Deserialize)]
pub struct MajorsQuery {
    pub place: Option<String>,
    pub lang: Option<String>,
}

/// GET /majors?place=<title>&lang=<en|fa>
pub async fn majors_page(
    State(state): State<AppState>,
    Query(query): Query<MajorsQuery>,
) -> Result<Response, AppError> {
    let title = query.place.unwrap_or_else(|| DEFAULT_FIELD.to_string());
    let locale = Locale::from_param(query.lang.as_deref());

    let records = match state.store.load_subfields(locale).await {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("majors page data load failed: {err:#}");
            return majors_error(StatusCode::INTERNAL_SERVER_ERROR, &title);
        }
    };

    match get_field_info(&records, &title) {
        Some(field) => Ok(render::page("majors.html", context! { field })?.into_response()),
        None => majors_error(StatusCode::NOT_FOUND, &title),
    }
}

fn majors_error(status: StatusCode, title: &str) -> Result<Response, AppError> {
    let html = render::page("majors_error.html", context! { title })?;
    Ok((status, html).into_response())
}

/// GET /test
pub async fn test_page(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.store.read_test_data().await {
        Ok(test) => Ok(render::page("test.html", context! { test })?.into_response()),
        Err(err) => {
            tracing::error!("test page load error: {err:#}");
            test_error(StatusCode::INTERNAL_SERVER_ERROR, "something went wrong")
        }
    }
}

fn test_error(status: StatusCode, message: &str) -> Result<Response, AppError> {
    let html = render::page("test_error.html", context! { message })?;
    Ok((status, html).into_response())
}

#[derive(Deserialize)]
pub struct TestSubmission {
    /// Kept as raw JSON: individual answers are validated leniently during
    /// scoring, only the overall shape is checked here.
    #[serde(default)]
    pub answers: Value,
}

/// POST /test
///
/// An empty or non-array submission is a client error; malformed entries
/// inside an otherwise valid submission are skipped by the scorer. On
/// success the normalized percentages travel to the results page in the
/// query string.
pub async fn test_submit(Json(submission): Json<TestSubmission>) -> Result<Response, AppError> {
    let answers = match submission.answers.as_array() {
        Some(list) if !list.is_empty() => list,
        _ => return test_error(StatusCode::BAD_REQUEST, "invalid test submission"),
    };

    let scores = compute_scores(answers);
    let target = format!("/test_ans?{}", score_query(&scores));
    Ok(Redirect::to(&target).into_response())
}

fn score_query(scores: &CategoryScores) -> String {
    scores
        .iter()
        .map(|(category, value)| format!("{}={}", category.as_str(), value as i64))
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Debug, Serialize)]
struct ProgressItem {
    label: &'static str,
    value: f64,
}

/// GET /test_ans?Analytical=..&Data=..&…
pub async fn test_result_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let scores = scores_from_query(&params);
    let locale = Locale::from_param(params.get("lang").map(String::as_str));

    let loaded = async {
        let weights = state.store.load_major_weights().await?;
        let records = state.store.load_subfields(locale).await?;
        anyhow::Ok((weights, records))
    }
    .await;
    let (weights, records) = match loaded {
        Ok(pair) => pair,
        Err(err) => {
            tracing::error!("test result processing error: {err:#}");
            return test_error(StatusCode::INTERNAL_SERVER_ERROR, "something went wrong");
        }
    };

    let ranked = rank_majors(&scores, &weights);
    let top_titles: Vec<String> = ranked
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|r| r.major.clone())
        .collect();
    let suggested_majors = get_descriptions(&records, &top_titles);

    let progress_items: Vec<ProgressItem> = scores
        .iter()
        .map(|(category, value)| ProgressItem {
            label: category.as_str(),
            value,
        })
        .collect();

    Ok(render::page(
        "test_ans.html",
        context! { progress_items, suggested_majors },
    )?
    .into_response())
}

/// Rebuilds the score vector from the results-page query string; missing or
/// non-numeric values fall back to 0.
fn scores_from_query(params: &HashMap<String, String>) -> CategoryScores {
    let mut scores = CategoryScores::new();
    for category in Category::ALL {
        let value = params
            .get(category.as_str())
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        scores.set(category, value);
    }
    scores
}

/// Any unknown path lands back on the index page.
pub async fn fallback_redirect() -> Redirect {
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_query_lists_every_category_in_order() {
        let mut scores = CategoryScores::new();
        scores.set(Category::Data, 100.0);
        scores.set(Category::Hardware, -50.0);
        assert_eq!(
            score_query(&scores),
            "Analytical=0&Data=100&AI=0&SoftwareDev=0&Hardware=-50&Security=0&Creative=0"
        );
    }

    #[test]
    fn test_scores_from_query_parses_values() {
        let params = HashMap::from([
            ("Data".to_string(), "100".to_string()),
            ("Creative".to_string(), "-20".to_string()),
        ]);
        let scores = scores_from_query(&params);
        assert_eq!(scores.get(Category::Data), 100.0);
        assert_eq!(scores.get(Category::Creative), -20.0);
        assert_eq!(scores.get(Category::Ai), 0.0);
    }

    #[test]
    fn test_scores_from_query_invalid_values_fall_back_to_zero() {
        let params = HashMap::from([
            ("Data".to_string(), "abc".to_string()),
            ("AI".to_string(), "NaN".to_string()),
            ("Security".to_string(), "inf".to_string()),
        ]);
        let scores = scores_from_query(&params);
        for (_, value) in scores.iter() {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_round_trip_query_encoding() {
        let mut scores = CategoryScores::new();
        scores.set(Category::Analytical, 73.0);
        scores.set(Category::SoftwareDev, 250.0);

        let query = score_query(&scores);
        let params: HashMap<String, String> = query
            .split('&')
            .filter_map(|pair| {
                let (k, v) = pair.split_once('=')?;
                Some((k.to_string(), v.to_string()))
            })
            .collect();
        assert_eq!(scores_from_query(&params), scores);
    }
}
