use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string_len_null(Characters::Name, 50).unique_key())
                    .col(integer_null(Characters::Height))
                    .col(integer_null(Characters::Mass))
                    .col(string_len_null(Characters::HairColor, 50))
                    .col(string_len_null(Characters::SkinColor, 50))
                    .col(string_len_null(Characters::EyeColor, 50))
                    .col(string_len_null(Characters::BirthYear, 50))
                    .col(string_len_null(Characters::Gender, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
}
