use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, NewCharacterDto},
    server::{
        data::character::CharacterRepository,
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
    },
};

/// Service for reading and inserting characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::ResourceError)` - No character with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: Resource::Character,
                id: character_id,
            })?;

        Ok(character.into())
    }

    /// Inserts a character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The stored character including its generated ID
    /// - `Err(Error::DbErr)` - Insert failed, including duplicate names
    pub async fn create_character(&self, character: NewCharacterDto) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db).create(character).await?;

        tracing::info!(id = %character.id, "Created character");

        Ok(character.into())
    }
}
