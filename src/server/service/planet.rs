use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{NewPlanetDto, PlanetDto},
    server::{
        data::planet::PlanetRepository,
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
    },
};

/// Service for reading and inserting planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::ResourceError)` - No planet with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: Resource::Planet,
                id: planet_id,
            })?;

        Ok(planet.into())
    }

    pub async fn create_planet(&self, planet: NewPlanetDto) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db).create(planet).await?;

        tracing::info!(id = %planet.id, "Created planet");

        Ok(planet.into())
    }
}
