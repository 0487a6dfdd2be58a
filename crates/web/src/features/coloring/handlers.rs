use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::coloring::{ColoringProgressResponse, SaveColoringRequest},
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/coloring-progress",
    request_body = SaveColoringRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Canvas state saved (latest wins per image)", body = ColoringProgressResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "coloring"
)]
pub async fn save_progress(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<SaveColoringRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let progress =
        services::save_progress(db.pool(), &user.email, &req.image_id, &req.canvas_state).await?;

    Ok(Json(ColoringProgressResponse::from(progress)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/coloring-progress/{image_id}",
    params(
        ("image_id" = String, Path, description = "Coloring image identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Saved canvas state", body = ColoringProgressResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Nothing saved for this image")
    ),
    tag = "coloring"
)]
pub async fn get_progress(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(image_id): Path<String>,
) -> Result<Response, WebError> {
    let progress = services::get_progress(db.pool(), &user.email, &image_id).await?;

    Ok(Json(ColoringProgressResponse::from(progress)).into_response())
}
