use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_past_scores, get_score, submit_score};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/submit-score", post(submit_score))
        .route("/score", get(get_score))
        .route("/past-scores", get(get_past_scores))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
