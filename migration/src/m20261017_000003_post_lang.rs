use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000002_post::Post;

static PK_POST_LANG: &str = "pk-post_lang";
static IDX_POST_LANG_LANG_ID: &str = "idx-post_lang-lang_id";
static FK_POST_LANG_POST_ID: &str = "fk-post_lang-post_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Language codes are 8 wide so region-carrying codes such as `en-gb` fit.
        manager
            .create_table(
                Table::create()
                    .table(PostLang::Table)
                    .if_not_exists()
                    .col(integer(PostLang::PostId))
                    .col(string_len(PostLang::LangId, 8))
                    .col(string_null(PostLang::Title))
                    .col(text_null(PostLang::Description))
                    .primary_key(
                        Index::create()
                            .name(PK_POST_LANG)
                            .col(PostLang::PostId)
                            .col(PostLang::LangId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POST_LANG_LANG_ID)
                    .table(PostLang::Table)
                    .col(PostLang::LangId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POST_LANG_POST_ID)
                    .from_tbl(PostLang::Table)
                    .from_col(PostLang::PostId)
                    .to_tbl(Post::Table)
                    .to_col(Post::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POST_LANG_POST_ID)
                    .table(PostLang::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POST_LANG_LANG_ID)
                    .table(PostLang::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PostLang::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PostLang {
    Table,
    PostId,
    LangId,
    Title,
    Description,
}
