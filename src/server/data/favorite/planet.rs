use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::db::FavoritePlanetModel;

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a planet as a favorite of the user
    pub async fn create(
        &self,
        planet_id: i32,
        user_id: i32,
    ) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::fav_planets::ActiveModel {
            planet: ActiveValue::Set(planet_id),
            user: ActiveValue::Set(user_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorite planet row ordered by ID
    pub async fn get_all(&self) -> Result<Vec<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavPlanets::find()
            .order_by_asc(entity::fav_planets::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite planet row
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavPlanets::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
