use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::{
        FavoriteCharacterDto, FavoritePlanetDto, NewFavoriteCharacterDto, NewFavoritePlanetDto,
    },
    server::{
        data::{
            character::CharacterRepository,
            favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
            planet::PlanetRepository,
            user::UserRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            validation::ValidationError,
            Error,
        },
    },
};

/// Service for managing users' favorite characters and planets.
///
/// Inserts verify that both referenced rows exist within the same transaction
/// as the insert, so a favorite never points at a missing user, character or
/// planet.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_fav_characters(&self) -> Result<Vec<FavoriteCharacterDto>, Error> {
        let favorites = FavoriteCharacterRepository::new(self.db).get_all().await?;

        Ok(favorites.into_iter().map(FavoriteCharacterDto::from).collect())
    }

    pub async fn get_fav_planets(&self) -> Result<Vec<FavoritePlanetDto>, Error> {
        let favorites = FavoritePlanetRepository::new(self.db).get_all().await?;

        Ok(favorites.into_iter().map(FavoritePlanetDto::from).collect())
    }

    /// Marks a character as a favorite of a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - The stored favorite including its generated ID
    /// - `Err(Error::ValidationError)` - The user or character does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_fav_character(
        &self,
        favorite: NewFavoriteCharacterDto,
    ) -> Result<FavoriteCharacterDto, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(favorite.user).await?.is_none() {
            return Err(ValidationError::UnknownReference {
                resource: Resource::User,
                id: favorite.user,
            }
            .into());
        }

        if CharacterRepository::new(&txn)
            .get_by_id(favorite.character)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference {
                resource: Resource::Character,
                id: favorite.character,
            }
            .into());
        }

        let favorite = FavoriteCharacterRepository::new(&txn)
            .create(favorite.character, favorite.user)
            .await?;

        txn.commit().await?;

        tracing::info!(
            id = %favorite.id,
            user = %favorite.user,
            character = %favorite.character,
            "Added favorite character"
        );

        Ok(favorite.into())
    }

    /// Marks a planet as a favorite of a user.
    ///
    /// # Returns
    /// - `Ok(FavoritePlanetDto)` - The stored favorite including its generated ID
    /// - `Err(Error::ValidationError)` - The user or planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_fav_planet(
        &self,
        favorite: NewFavoritePlanetDto,
    ) -> Result<FavoritePlanetDto, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(favorite.user).await?.is_none() {
            return Err(ValidationError::UnknownReference {
                resource: Resource::User,
                id: favorite.user,
            }
            .into());
        }

        if PlanetRepository::new(&txn)
            .get_by_id(favorite.planet)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference {
                resource: Resource::Planet,
                id: favorite.planet,
            }
            .into());
        }

        let favorite = FavoritePlanetRepository::new(&txn)
            .create(favorite.planet, favorite.user)
            .await?;

        txn.commit().await?;

        tracing::info!(
            id = %favorite.id,
            user = %favorite.user,
            planet = %favorite.planet,
            "Added favorite planet"
        );

        Ok(favorite.into())
    }

    /// Deletes a favorite character row.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted
    /// - `Err(Error::ResourceError)` - No favorite character with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_fav_character(&self, favorite_id: i32) -> Result<(), Error> {
        let result = FavoriteCharacterRepository::new(self.db)
            .delete(favorite_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::NotFound {
                resource: Resource::FavCharacter,
                id: favorite_id,
            }
            .into());
        }

        tracing::info!(id = %favorite_id, "Removed favorite character");

        Ok(())
    }

    /// Deletes a favorite planet row.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted
    /// - `Err(Error::ResourceError)` - No favorite planet with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_fav_planet(&self, favorite_id: i32) -> Result<(), Error> {
        let result = FavoritePlanetRepository::new(self.db)
            .delete(favorite_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::NotFound {
                resource: Resource::FavPlanet,
                id: favorite_id,
            }
            .into());
        }

        tracing::info!(id = %favorite_id, "Removed favorite planet");

        Ok(())
    }
}
