use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::db::FavoriteCharacterModel;

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of the user
    pub async fn create(
        &self,
        character_id: i32,
        user_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::fav_characters::ActiveModel {
            character: ActiveValue::Set(character_id),
            user: ActiveValue::Set(user_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorite character row ordered by ID
    pub async fn get_all(&self) -> Result<Vec<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavCharacters::find()
            .order_by_asc(entity::fav_characters::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite character row
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavCharacters::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
