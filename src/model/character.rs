use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A character as stored in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl From<entity::characters::Model> for CharacterDto {
    fn from(character: entity::characters::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            birth_year: character.birth_year,
            gender: character.gender,
        }
    }
}

/// Request body for inserting a character.
///
/// Every key must be present, but any value may be `null` since every
/// character column is nullable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewCharacterDto {
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub height: Option<i32>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub mass: Option<i32>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub hair_color: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub skin_color: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub eye_color: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub birth_year: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub gender: Option<String>,
}
