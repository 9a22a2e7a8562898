use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user.
///
/// Only the id and email are exposed. The password never leaves the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
