use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_progress, save_progress};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/", post(save_progress))
        .route("/:image_id", get(get_progress))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
