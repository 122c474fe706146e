//! HTML rendering. Templates are embedded in the binary and compiled into a
//! process-wide minijinja environment on first use.

use std::sync::OnceLock;

use axum::response::Html;
use minijinja::{Environment, Value};

use crate::errors::AppError;

static TEMPLATES: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    TEMPLATES.get_or_init(|| {
        let mut env = Environment::new();
        let sources = [
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("majors.html", include_str!("../templates/majors.html")),
            (
                "majors_error.html",
                include_str!("../templates/majors_error.html"),
            ),
            ("test.html", include_str!("../templates/test.html")),
            ("test_ans.html", include_str!("../templates/test_ans.html")),
            (
                "test_error.html",
                include_str!("../templates/test_error.html"),
            ),
            ("error.html", include_str!("../templates/error.html")),
        ];
        for (name, source) in sources {
            env.add_template(name, source)
                .expect("embedded template must compile");
        }
        env
    })
}

/// Renders a named template into a full HTML response body.
pub fn page(name: &str, ctx: Value) -> Result<Html<String>, AppError> {
    let template = environment().get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_index_renders() {
        let html = page("index.html", context! {}).unwrap();
        assert!(html.0.contains("/test"));
        assert!(html.0.contains("/majors"));
    }

    #[test]
    fn test_majors_renders_field_view() {
        let html = page(
            "majors.html",
            context! { field => context! {
                title => "Computer Science",
                introduction => "The study of computation.",
                top_subfield => "Engineering",
                subfields => vec![context! {
                    title => "Artificial Intelligence",
                    short_introduction => "Learning machines.",
                }],
            }},
        )
        .unwrap();
        assert!(html.0.contains("Computer Science"));
        assert!(html.0.contains("Artificial Intelligence"));
        assert!(html.0.contains("Engineering"));
    }

    #[test]
    fn test_majors_error_carries_title() {
        let html = page("majors_error.html", context! { title => "Alchemy" }).unwrap();
        assert!(html.0.contains("Alchemy"));
    }

    #[test]
    fn test_result_page_renders_scores_and_majors() {
        let html = page(
            "test_ans.html",
            context! {
                progress_items => vec![
                    context! { label => "Data", value => 100.0 },
                    context! { label => "Creative", value => -20.0 },
                ],
                suggested_majors => vec![context! {
                    title => "Data Science",
                    description => "Insight from data.",
                }],
            },
        )
        .unwrap();
        assert!(html.0.contains("Data Science"));
        assert!(html.0.contains("100"));
    }

    #[test]
    fn test_error_pages_render_message() {
        let html = page("test_error.html", context! { message => "invalid test submission" })
            .unwrap();
        assert!(html.0.contains("invalid test submission"));

        let html = page(
            "error.html",
            context! { status => 404u16, message => "\"X\" was not found" },
        )
        .unwrap();
        assert!(html.0.contains("404"));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        assert!(page("nope.html", context! {}).is_err());
    }
}
