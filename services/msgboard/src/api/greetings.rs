//! Greeting API handlers.
//!
//! # Purpose
//! Demonstrates path- and query-parameter parsing with the smallest possible
//! handlers: both endpoints render the same greeting, differing only in where
//! the name comes from.
use crate::api::error::{ApiError, api_validation_error};
use axum::Json;
use axum::extract::{Path, Query};
use std::collections::HashMap;

fn render_greeting(name: &str) -> String {
    format!("Hello {name}!")
}

#[utoipa::path(
    get,
    path = "/hellobypath/{name}",
    tag = "greetings",
    params(
        ("name" = String, Path, description = "The name to say hello to")
    ),
    responses(
        (status = 200, description = "Rendered greeting", body = String)
    )
)]
/// Say hello to the name specified by path.
pub(crate) async fn hello_by_path(Path(name): Path<String>) -> Json<String> {
    Json(render_greeting(&name))
}

#[utoipa::path(
    get,
    path = "/hellobyparam",
    tag = "greetings",
    params(
        ("name" = String, Query, description = "The name to say hello to")
    ),
    responses(
        (status = 200, description = "Rendered greeting", body = String),
        (status = 400, description = "Input validation failed", body = crate::api::types::ErrorResponse)
    )
)]
/// Say hello to the name specified by query parameter.
///
/// Parsing is strict: `name` is required and no other parameter is accepted.
pub(crate) async fn hello_by_param(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<String>, ApiError> {
    let mut name = None;
    for (key, value) in &params {
        match key.as_str() {
            "name" => name = Some(value.clone()),
            other => {
                return Err(api_validation_error(&format!(
                    "unknown parameter: {other}"
                )));
            }
        }
    }
    let name = name.ok_or_else(|| api_validation_error("missing required parameter: name"))?;
    Ok(Json(render_greeting(&name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_includes_the_name() {
        assert_eq!(render_greeting("Bob"), "Hello Bob!");
    }
}
