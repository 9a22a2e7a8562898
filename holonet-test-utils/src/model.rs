//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holonet crate to keep fixture
//! signatures short.

pub type UserModel = entity::user::Model;

pub type CharacterModel = entity::characters::Model;

pub type PlanetModel = entity::planets::Model;

pub type FavoriteCharacterModel = entity::fav_characters::Model;

pub type FavoritePlanetModel = entity::fav_planets::Model;
