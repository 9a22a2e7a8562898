use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000001_user::User,
    m20261019_000002_characters::Characters,
};

static IDX_FAV_CHARACTERS_USER: &str = "idx-fav_characters-user";
static FK_FAV_CHARACTERS_CHARACTER: &str = "fk-fav_characters-character";
static FK_FAV_CHARACTERS_USER: &str = "fk-fav_characters-user";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavCharacters::Id))
                    .col(integer(FavCharacters::Character))
                    .col(integer(FavCharacters::User))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAV_CHARACTERS_CHARACTER)
                            .from(FavCharacters::Table, FavCharacters::Character)
                            .to(Characters::Table, Characters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAV_CHARACTERS_USER)
                            .from(FavCharacters::Table, FavCharacters::User)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAV_CHARACTERS_USER)
                    .table(FavCharacters::Table)
                    .col(FavCharacters::User)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAV_CHARACTERS_USER)
                    .table(FavCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavCharacters {
    Table,
    Id,
    Character,
    User,
}
