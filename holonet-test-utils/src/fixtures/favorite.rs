use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel},
    TestContext,
};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_fav_character(
        &self,
        character_id: i32,
        user_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(
            entity::prelude::FavCharacters::insert(entity::fav_characters::ActiveModel {
                character: ActiveValue::Set(character_id),
                user: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_fav_planet(
        &self,
        planet_id: i32,
        user_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(
            entity::prelude::FavPlanets::insert(entity::fav_planets::ActiveModel {
                planet: ActiveValue::Set(planet_id),
                user: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
