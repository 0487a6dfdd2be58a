use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{current_user, get_profile};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/current-user", get(current_user))
        .route("/profile", get(get_profile))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
