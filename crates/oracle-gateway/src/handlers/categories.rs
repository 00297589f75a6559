//! Tool category endpoint.

use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;

use oracle_core::categories;

/// Return the static category table as `{category: [function, ...]}`.
///
/// Categories appear in table order. Functions not listed under any category
/// are classified as `"other"`.
pub async fn tool_categories() -> impl IntoResponse {
    let table: IndexMap<&'static str, &'static [&'static str]> = categories::categories().collect();
    Json(table)
}
