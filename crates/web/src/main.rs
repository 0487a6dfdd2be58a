use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::{AuthState, JwtKeys};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::scores::handlers::submit_score,
        features::scores::handlers::get_score,
        features::scores::handlers::get_past_scores,
        features::users::handlers::current_user,
        features::users::handlers::get_profile,
        features::coloring::handlers::save_progress,
        features::coloring::handlers::get_progress,
    ),
    components(
        schemas(
            storage::dto::score::SubmitScoreRequest,
            storage::dto::score::SubmitScoreResponse,
            storage::dto::score::CurrentScoresResponse,
            storage::dto::score::PastScoresResponse,
            storage::dto::score::PastScoreEntry,
            storage::dto::user::CurrentUserResponse,
            storage::dto::user::ProfileResponse,
            storage::dto::user::ProfileInfo,
            storage::dto::coloring::SaveColoringRequest,
            storage::dto::coloring::ColoringProgressResponse,
            storage::models::ActivityId,
            storage::models::ScoreRecord,
            storage::models::ScoreSnapshot,
        )
    ),
    tags(
        (name = "scores", description = "Score submission and progress endpoints"),
        (name = "users", description = "Authenticated identity and profile endpoints"),
        (name = "coloring", description = "Coloring canvas persistence endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting VR Learning API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let auth = AuthState {
        keys: JwtKeys::from_secret(config.jwt_secret.as_bytes()),
        db: db.clone(),
    };

    let api = Router::new()
        .merge(features::scores::routes(auth.clone()))
        .merge(features::users::routes(auth.clone()))
        .nest("/coloring-progress", features::coloring::routes(auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
