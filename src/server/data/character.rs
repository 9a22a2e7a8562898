use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::{model::character::NewCharacterDto, server::model::db::CharacterModel};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character from a validated request body
    pub async fn create(
        &self,
        character: NewCharacterDto,
    ) -> Result<CharacterModel, DbErr> {
        let character = entity::characters::ActiveModel {
            name: ActiveValue::Set(character.name),
            height: ActiveValue::Set(character.height),
            mass: ActiveValue::Set(character.mass),
            hair_color: ActiveValue::Set(character.hair_color),
            skin_color: ActiveValue::Set(character.skin_color),
            eye_color: ActiveValue::Set(character.eye_color),
            birth_year: ActiveValue::Set(character.birth_year),
            gender: ActiveValue::Set(character.gender),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Characters::find()
            .order_by_asc(entity::characters::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Characters::find_by_id(character_id)
            .one(self.db)
            .await
    }
}
