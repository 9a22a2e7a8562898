use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's favorite character
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub character: i32,
    pub user: i32,
}

impl From<entity::fav_characters::Model> for FavoriteCharacterDto {
    fn from(favorite: entity::fav_characters::Model) -> Self {
        Self {
            id: favorite.id,
            character: favorite.character,
            user: favorite.user,
        }
    }
}

/// A user's favorite planet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub planet: i32,
    pub user: i32,
}

impl From<entity::fav_planets::Model> for FavoritePlanetDto {
    fn from(favorite: entity::fav_planets::Model) -> Self {
        Self {
            id: favorite.id,
            planet: favorite.planet,
            user: favorite.user,
        }
    }
}

/// Request body for marking a character as a user's favorite
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewFavoriteCharacterDto {
    pub character: i32,
    pub user: i32,
}

/// Request body for marking a planet as a user's favorite
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewFavoritePlanetDto {
    pub planet: i32,
    pub user: i32,
}
