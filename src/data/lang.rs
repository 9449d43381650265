use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::db::LangModel;

pub struct LangRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LangRepository<'a, C> {
    /// Creates a new instance of [`LangRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every active language ordered by code
    pub async fn get_active(&self) -> Result<Vec<LangModel>, DbErr> {
        entity::prelude::Lang::find()
            .filter(entity::lang::Column::Status.eq(entity::lang::STATUS_ACTIVE))
            .order_by_asc(entity::lang::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<LangModel>, DbErr> {
        entity::prelude::Lang::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Finds a language by its full locale, e.g. `en-US`
    pub async fn get_by_locale(&self, locale: &str) -> Result<Option<LangModel>, DbErr> {
        entity::prelude::Lang::find()
            .filter(entity::lang::Column::Locale.eq(locale))
            .one(self.db)
            .await
    }
}
