//! Post and post translation fixture utilities.
//!
//! This module provides methods for inserting posts and their translations, and factory
//! functions for creating in-memory model instances.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{PostLangModel, PostModel},
    TestContext,
};

impl TestContext {
    pub fn post<'a>(&'a self) -> PostFixtures<'a> {
        PostFixtures { setup: self }
    }
}

pub struct PostFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PostFixtures<'a> {
    /// Insert a post with a database assigned id.
    pub async fn insert_post(&self, status_id: i32) -> Result<PostModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Post::insert(entity::post::ActiveModel {
            status_id: ActiveValue::Set(status_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a post with a fixed id.
    pub async fn insert_mock_post(
        &self,
        post_id: i32,
        status_id: i32,
    ) -> Result<PostModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Post::insert(entity::post::ActiveModel {
            id: ActiveValue::Set(post_id),
            status_id: ActiveValue::Set(status_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_translation(
        &self,
        post_id: i32,
        lang_id: &str,
        title: &str,
        description: &str,
    ) -> Result<PostLangModel, TestError> {
        Ok(entity::prelude::PostLang::insert(entity::post_lang::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            lang_id: ActiveValue::Set(lang_id.to_string()),
            title: ActiveValue::Set(Some(title.to_string())),
            description: ActiveValue::Set(Some(description.to_string())),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Number of stored translations of `post_id`.
    pub async fn count_translations(&self, post_id: i32) -> Result<u64, TestError> {
        Ok(entity::prelude::PostLang::find()
            .filter(entity::post_lang::Column::PostId.eq(post_id))
            .count(&self.setup.db)
            .await?)
    }
}
