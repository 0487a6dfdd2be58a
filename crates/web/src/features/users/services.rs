use sqlx::PgPool;
use storage::models::{Profile, User};
use storage::repository::{profile::ProfileRepository, user::UserRepository};
use uuid::Uuid;

pub async fn get_user(pool: &PgPool, user_id: Uuid) -> storage::Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(user_id).await
}

pub async fn get_profile(pool: &PgPool, email: &str) -> storage::Result<Profile> {
    let repo = ProfileRepository::new(pool);
    repo.find_by_email(email).await
}
