use std::sync::Arc;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    error::Error,
    record::Post,
    translate::{relation, TranslateConfig},
};

type PostLang = entity::post_lang::Entity;

/// Loads posts as translated records.
///
/// The `with_*` variants prefetch translation rows so rendering the posts afterwards does not
/// query per post.
pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    config: Arc<TranslateConfig<PostLang>>,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new instance of [`PostRepository`]
    pub fn new(db: &'a C, config: Arc<TranslateConfig<PostLang>>) -> Self {
        Self { db, config }
    }

    /// Finds a post, its translations are fetched on first use
    pub async fn get_by_id(&self, post_id: i32) -> Result<Option<Post>, Error> {
        let post = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?;

        Ok(post.map(|model| Post::from_model(Arc::clone(&self.config), model)))
    }

    /// Finds a post together with all of its translations
    pub async fn get_by_id_with_translations(&self, post_id: i32) -> Result<Option<Post>, Error> {
        let Some(model) = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let translations = relation::translations::<PostLang, C>(self.db, &model.id).await?;

        Ok(Some(Post::with_translations(
            Arc::clone(&self.config),
            model,
            translations,
        )?))
    }

    /// Finds a post together with its current and source language translations
    pub async fn get_by_id_with_current_translate(
        &self,
        post_id: i32,
    ) -> Result<Option<Post>, Error> {
        let Some(model) = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let translations =
            relation::current_translate::<PostLang, C>(self.db, &model.id, self.config.locale())
                .await?;

        Ok(Some(Post::with_current_translate(
            Arc::clone(&self.config),
            model,
            translations,
        )?))
    }

    /// Returns every post ordered by id with its current and source language translations.
    ///
    /// Uses two queries regardless of the number of posts.
    pub async fn get_all_with_current_translate(&self) -> Result<Vec<Post>, Error> {
        let models = entity::prelude::Post::find()
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        let keys: Vec<i32> = models.iter().map(|model| model.id).collect();
        let groups =
            relation::current_translate_many::<PostLang, C>(self.db, &keys, self.config.locale())
                .await?;

        models
            .into_iter()
            .zip(groups)
            .map(|(model, (_, translations))| {
                Post::with_current_translate(Arc::clone(&self.config), model, translations)
            })
            .collect()
    }

    /// Returns every post ordered by id with the languages it is translated into.
    pub async fn get_all_with_has_translate(&self) -> Result<Vec<Post>, Error> {
        let models = entity::prelude::Post::find()
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        let keys: Vec<i32> = models.iter().map(|model| model.id).collect();
        let groups = relation::has_translate_many::<PostLang, C>(self.db, &keys).await?;

        Ok(models
            .into_iter()
            .zip(groups)
            .map(|(model, (_, languages))| {
                Post::from_model(Arc::clone(&self.config), model).with_has_translate(languages)
            })
            .collect())
    }

    /// Finds posts whose current or source language title equals `title`
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Post>, Error> {
        let models = relation::join_current_translate::<_, PostLang>(
            entity::prelude::Post::find(),
            self.config.locale(),
        )
        .filter(entity::post_lang::Column::Title.eq(title))
        .distinct()
        .order_by_asc(entity::post::Column::Id)
        .all(self.db)
        .await?;

        Ok(models
            .into_iter()
            .map(|model| Post::from_model(Arc::clone(&self.config), model))
            .collect())
    }
}
