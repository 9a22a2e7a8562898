use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A planet as stored in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

impl From<entity::planets::Model> for PlanetDto {
    fn from(planet: entity::planets::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
        }
    }
}

/// Request body for inserting a planet.
///
/// `name`, `population`, `terrain`, `climate` and `diameter` must be present,
/// only `name` may not be `null`. The remaining fields may be omitted and are
/// left out of the echoed response when they are.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewPlanetDto {
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub population: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub terrain: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub climate: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    #[schema(required = true)]
    pub diameter: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_period: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_water: Option<i32>,
}
