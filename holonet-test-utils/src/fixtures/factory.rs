//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database
//! interaction, suitable for serialization unit tests.

use crate::{
    fixtures::user::{mock_email, MOCK_PASSWORD},
    model::{CharacterModel, PlanetModel, UserModel},
};

/// Create a mock user model with the provided ID and username.
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        username: username.to_string(),
        email: mock_email(username),
        password: MOCK_PASSWORD.to_string(),
        is_active: true,
    }
}

/// Create a mock character model with every optional column left empty.
pub fn mock_character_model(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: Some(name.to_string()),
        height: None,
        mass: None,
        hair_color: None,
        skin_color: None,
        eye_color: None,
        birth_year: None,
        gender: None,
    }
}

/// Create a mock planet model with every optional column left empty.
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        diameter: None,
        rotation_period: None,
        gravity: None,
        population: None,
        climate: None,
        terrain: None,
        surface_water: None,
    }
}
