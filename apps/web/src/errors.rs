#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use thiserror::Error;

use crate::render;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Handlers that own a branded error page (majors, quiz) render it
/// themselves; this impl is the generic path for everything else and the
/// last resort when rendering itself fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Data error: {0}")]
    Data(#[from] anyhow::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(title) => (
                StatusCode::NOT_FOUND,
                format!("\"{title}\" was not found"),
            ),
            AppError::InvalidSubmission(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Data(e) => {
                tracing::error!("data error: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "something went wrong".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "something went wrong".to_string(),
                )
            }
        };

        let page = render::page(
            "error.html",
            context! { status => status.as_u16(), message => &message },
        );
        match page {
            Ok(html) => (status, html).into_response(),
            // Template layer is itself broken; fall back to bare HTML.
            Err(_) => (
                status,
                Html(format!("<h1>{}</h1><p>{message}</p>", status.as_u16())),
            )
                .into_response(),
        }
    }
}
