use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

/// Password stored for every mock user
pub static MOCK_PASSWORD: &str = "mock-password";

/// Email address used for a mock user with the provided username
pub fn mock_email(username: &str) -> String {
    format!("{}@holonet.test", username)
}

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with a derived email and [`MOCK_PASSWORD`]
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(username, &mock_email(username), MOCK_PASSWORD, true)
            .await
    }

    pub async fn insert_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(password.to_string()),
                is_active: ActiveValue::Set(is_active),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
