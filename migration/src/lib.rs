pub use sea_orm_migration::prelude::*;

mod m20261019_000001_user;
mod m20261019_000002_characters;
mod m20261019_000003_planets;
mod m20261019_000004_fav_characters;
mod m20261019_000005_fav_planets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_user::Migration),
            Box::new(m20261019_000002_characters::Migration),
            Box::new(m20261019_000003_planets::Migration),
            Box::new(m20261019_000004_fav_characters::Migration),
            Box::new(m20261019_000005_fav_planets::Migration),
        ]
    }
}
