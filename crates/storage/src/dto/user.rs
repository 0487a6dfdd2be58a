use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Profile, User};

/// Identity of the authenticated caller, as the client stores it.
/// Field names follow the existing client contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub auth_method: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: ProfileInfo,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileInfo {
    pub email: String,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub disorder: Option<String>,
    pub mobile: Option<String>,
    pub avatar: Option<String>,
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            auth_method: user.auth_method,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            profile: ProfileInfo {
                email: profile.email,
                name: profile.name,
                age: profile.age,
                gender: profile.gender,
                disorder: profile.disorder,
                mobile: profile.mobile,
                avatar: profile.avatar,
            },
        }
    }
}
