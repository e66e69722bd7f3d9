use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// Tag for grouping the connectivity check in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Connectivity check.
///
/// # Returns
/// - `200 OK` - `{"success": "api connected"}`
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API reachable", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            success: "api connected".to_string(),
        }),
    )
}
