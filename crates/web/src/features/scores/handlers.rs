use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{
        CurrentScoresResponse, PastScoresResponse, SubmitScoreRequest, SubmitScoreResponse,
    },
    models::ActivityId,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/submit-score",
    request_body = SubmitScoreRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Score merged and persisted", body = SubmitScoreResponse),
        (status = 400, description = "Unknown activity or score out of range"),
        (status = 401, description = "Missing/invalid token or email mismatch")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    // One user may never write another's record, even with a valid token.
    if user.email != req.email {
        tracing::warn!(
            claimed = %req.email,
            "Submission email does not match authenticated user"
        );
        return Err(WebError::Unauthorized(
            "Email does not match authenticated user".to_string(),
        ));
    }

    let activity = ActivityId::parse(&req.activity)
        .ok_or_else(|| WebError::BadRequest(format!("Unknown activity: {}", req.activity)))?;

    services::submit_score(db.pool(), &user.email, activity, req.score).await?;

    Ok(Json(SubmitScoreResponse {
        message: "Score submitted successfully".to_string(),
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/score",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Best score per activity for the authenticated user; empty map when nothing has been submitted", body = CurrentScoresResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "scores"
)]
pub async fn get_score(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let score = services::get_current(db.pool(), &user.email).await?;

    Ok(Json(CurrentScoresResponse { score }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/past-scores",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Snapshot history in ascending submission order", body = PastScoresResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "scores"
)]
pub async fn get_past_scores(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let history = services::get_history(db.pool(), &user.email).await?;

    Ok(Json(PastScoresResponse::from_history(&user.email, history)).into_response())
}
