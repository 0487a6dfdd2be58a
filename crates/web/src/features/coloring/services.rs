use sqlx::PgPool;
use storage::models::ColoringProgress;
use storage::repository::coloring::ColoringRepository;

pub async fn save_progress(
    pool: &PgPool,
    email: &str,
    image_id: &str,
    canvas_state: &str,
) -> storage::Result<ColoringProgress> {
    let repo = ColoringRepository::new(pool);
    repo.upsert(email, image_id, canvas_state).await
}

pub async fn get_progress(
    pool: &PgPool,
    email: &str,
    image_id: &str,
) -> storage::Result<ColoringProgress> {
    let repo = ColoringRepository::new(pool);
    repo.find(email, image_id).await
}
