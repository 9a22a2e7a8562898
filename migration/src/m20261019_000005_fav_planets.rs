use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000001_user::User,
    m20261019_000003_planets::Planets,
};

static IDX_FAV_PLANETS_USER: &str = "idx-fav_planets-user";
static FK_FAV_PLANETS_PLANET: &str = "fk-fav_planets-planet";
static FK_FAV_PLANETS_USER: &str = "fk-fav_planets-user";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavPlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavPlanets::Id))
                    .col(integer(FavPlanets::Planet))
                    .col(integer(FavPlanets::User))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAV_PLANETS_PLANET)
                            .from(FavPlanets::Table, FavPlanets::Planet)
                            .to(Planets::Table, Planets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAV_PLANETS_USER)
                            .from(FavPlanets::Table, FavPlanets::User)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAV_PLANETS_USER)
                    .table(FavPlanets::Table)
                    .col(FavPlanets::User)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAV_PLANETS_USER)
                    .table(FavPlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavPlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavPlanets {
    Table,
    Id,
    Planet,
    User,
}
