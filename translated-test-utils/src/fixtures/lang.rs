use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::LangModel, TestContext};

impl TestContext {
    pub fn lang<'a>(&'a mut self) -> LangFixtures<'a> {
        LangFixtures { setup: self }
    }
}

pub struct LangFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> LangFixtures<'a> {
    pub async fn insert_lang(
        &self,
        id: &str,
        locale: &str,
        name: &str,
        status: i16,
    ) -> Result<LangModel, TestError> {
        Ok(entity::prelude::Lang::insert(entity::lang::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            locale: ActiveValue::Set(locale.to_string()),
            name: ActiveValue::Set(name.to_string()),
            status: ActiveValue::Set(Some(status)),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
