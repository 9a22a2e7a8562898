use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len_uniq(Planets::Name, 50))
                    .col(integer_null(Planets::Diameter))
                    .col(integer_null(Planets::RotationPeriod))
                    .col(string_len_null(Planets::Gravity, 50))
                    .col(big_integer_null(Planets::Population))
                    .col(string_len_null(Planets::Climate, 50))
                    .col(string_len_null(Planets::Terrain, 50))
                    .col(integer_null(Planets::SurfaceWater))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
}
