use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::user::{CurrentUserResponse, ProfileResponse},
};

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/current-user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Identity of the authenticated caller", body = CurrentUserResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "users"
)]
pub async fn current_user(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let user = services::get_user(db.pool(), user.user_id).await?;

    Ok(Json(CurrentUserResponse::from(user)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/profile",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile of the authenticated caller", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No profile saved yet")
    ),
    tag = "users"
)]
pub async fn get_profile(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let profile = services::get_profile(db.pool(), &user.email).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}
