use sea_orm_migration::{prelude::*, schema::*};

static IDX_LANG_NAME: &str = "idx-lang-name";
static IDX_LANG_STATUS: &str = "idx-lang-status";

/// Matches `entity::lang::STATUS_ACTIVE`.
const STATUS_ACTIVE: i16 = 1;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lang::Table)
                    .if_not_exists()
                    .col(string_len(Lang::Id, 2).primary_key())
                    .col(string_len(Lang::Locale, 8))
                    .col(string_len(Lang::Name, 32))
                    .col(small_integer_null(Lang::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LANG_NAME)
                    .table(Lang::Table)
                    .col(Lang::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LANG_STATUS)
                    .table(Lang::Table)
                    .col(Lang::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Lang::Table)
                    .columns([Lang::Id, Lang::Locale, Lang::Name, Lang::Status])
                    .values_panic(["en".into(), "en-US".into(), "ENG".into(), STATUS_ACTIVE.into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LANG_STATUS)
                    .table(Lang::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_LANG_NAME).table(Lang::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lang::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Lang {
    Table,
    Id,
    Locale,
    Name,
    Status,
}
