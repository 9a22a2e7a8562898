//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so repositories and services don't
//! have to spell out the `entity` crate paths.

/// A catalog user. Carries the password column, never serialize this directly.
pub type UserModel = entity::user::Model;

/// A catalog character.
pub type CharacterModel = entity::characters::Model;

/// A catalog planet.
pub type PlanetModel = entity::planets::Model;

/// A favorite-relation between a user and a character.
pub type FavoriteCharacterModel = entity::fav_characters::Model;

/// A favorite-relation between a user and a planet.
pub type FavoritePlanetModel = entity::fav_planets::Model;
