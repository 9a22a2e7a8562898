use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::{model::planet::NewPlanetDto, server::model::db::PlanetModel};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a planet from a validated request body
    ///
    /// Optional fields that were not submitted are stored as `NULL`.
    pub async fn create(&self, planet: NewPlanetDto) -> Result<PlanetModel, DbErr> {
        let planet = entity::planets::ActiveModel {
            name: ActiveValue::Set(planet.name),
            diameter: ActiveValue::Set(planet.diameter),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            gravity: ActiveValue::Set(planet.gravity),
            population: ActiveValue::Set(planet.population),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            surface_water: ActiveValue::Set(planet.surface_water),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planets::find()
            .order_by_asc(entity::planets::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planets::find_by_id(planet_id)
            .one(self.db)
            .await
    }
}
