use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a character with the provided name and standard test attributes
    pub async fn insert_mock_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Characters::insert(entity::characters::ActiveModel {
                name: ActiveValue::Set(Some(name.to_string())),
                height: ActiveValue::Set(Some(172)),
                mass: ActiveValue::Set(Some(77)),
                hair_color: ActiveValue::Set(Some("brown".to_string())),
                skin_color: ActiveValue::Set(Some("fair".to_string())),
                eye_color: ActiveValue::Set(Some("brown".to_string())),
                birth_year: ActiveValue::Set(Some("19BBY".to_string())),
                gender: ActiveValue::Set(Some("n/a".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a planet with the provided name and standard test attributes
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planets::insert(entity::planets::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set(Some(10_000)),
                rotation_period: ActiveValue::Set(Some(24)),
                gravity: ActiveValue::Set(Some("1 standard".to_string())),
                population: ActiveValue::Set(Some(1_000_000)),
                climate: ActiveValue::Set(Some("temperate".to_string())),
                terrain: ActiveValue::Set(Some("grasslands".to_string())),
                surface_water: ActiveValue::Set(Some(40)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
