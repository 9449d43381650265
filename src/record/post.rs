use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, IdenStatic, IntoActiveModel,
    Iterable, Value,
};

use crate::{
    config::LocaleSettings,
    error::Error,
    model::{
        db::{PostLangModel, PostModel},
        post::PostDto,
    },
    translate::{AttributeProxy, TranslateConfig, TranslationCoordinator, TranslationEntity},
};

type PostLang = entity::post_lang::Entity;

impl TranslationEntity for PostLang {
    type ParentKey = i32;

    fn foreign_key_column() -> Self::Column {
        entity::post_lang::Column::PostId
    }

    fn language_column() -> Self::Column {
        entity::post_lang::Column::LangId
    }
}

/// Translated attributes of a post as `(attribute, post_lang column)` pairs.
pub const POST_ATTRIBUTES: [(&str, &str); 2] =
    [("title_lang", "title"), ("description", "description")];

/// Builds the translation configuration shared by all posts.
pub fn post_translate_config(
    settings: &LocaleSettings,
) -> Result<Arc<TranslateConfig<PostLang>>, Error> {
    let attributes = AttributeProxy::new(POST_ATTRIBUTES)?;

    Ok(Arc::new(TranslateConfig::new(attributes, settings)))
}

/// A post whose title and description are stored per language in `post_lang`.
pub struct Post {
    model: entity::post::ActiveModel,
    translate: TranslationCoordinator<PostLang>,
}

impl Post {
    /// Creates a post that is inserted on the first [`save`](Self::save).
    pub fn new(config: Arc<TranslateConfig<PostLang>>, status_id: i32) -> Self {
        Self {
            model: entity::post::ActiveModel {
                status_id: ActiveValue::Set(status_id),
                ..Default::default()
            },
            translate: TranslationCoordinator::new(config),
        }
    }

    /// Wraps a stored post; its translations are fetched on first use.
    pub fn from_model(config: Arc<TranslateConfig<PostLang>>, model: PostModel) -> Self {
        Self {
            translate: TranslationCoordinator::for_parent(config, model.id),
            model: model.into_active_model(),
        }
    }

    /// Wraps a stored post together with all of its translations.
    pub fn with_translations(
        config: Arc<TranslateConfig<PostLang>>,
        model: PostModel,
        translations: Vec<PostLangModel>,
    ) -> Result<Self, Error> {
        Ok(Self {
            translate: TranslationCoordinator::with_translations(config, model.id, translations)?,
            model: model.into_active_model(),
        })
    }

    /// Wraps a stored post together with its prefetched current and source translations.
    pub fn with_current_translate(
        config: Arc<TranslateConfig<PostLang>>,
        model: PostModel,
        translations: Vec<PostLangModel>,
    ) -> Result<Self, Error> {
        Ok(Self {
            translate: TranslationCoordinator::with_current_translate(
                config,
                model.id,
                translations,
            )?,
            model: model.into_active_model(),
        })
    }

    pub fn with_has_translate(mut self, languages: Vec<String>) -> Self {
        self.translate = self.translate.with_has_translate(languages);
        self
    }

    pub fn id(&self) -> Option<i32> {
        self.model.id.try_as_ref().copied()
    }

    pub fn is_new_record(&self) -> bool {
        self.id().is_none()
    }

    pub fn status_id(&self) -> Option<i32> {
        self.model.status_id.try_as_ref().copied()
    }

    pub fn set_status_id(&mut self, status_id: i32) {
        self.model.status_id.set_if_not_equals(status_id);
    }

    pub fn model(&self) -> &entity::post::ActiveModel {
        &self.model
    }

    pub fn translate(&self) -> &TranslationCoordinator<PostLang> {
        &self.translate
    }

    pub fn translate_mut(&mut self) -> &mut TranslationCoordinator<PostLang> {
        &mut self.translate
    }

    /// Current language code.
    pub fn language(&self) -> &str {
        self.translate.language()
    }

    /// Switches the post to `locale` for subsequent translated reads and writes.
    pub fn set_language(&mut self, locale: &str) {
        self.translate.set_language(locale);
    }

    /// Reads translated attribute `name` in the current language.
    pub async fn get<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<Option<Value>, Error> {
        self.translate.get(db, name).await
    }

    /// Reads translated attribute `name` as a string, `None` when it is unset or null.
    pub async fn get_string<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<Option<String>, Error> {
        self.translate.get_as::<String, C>(db, name).await
    }

    /// Writes translated attribute `name` in the current language.
    ///
    /// The value is stored on the next [`save`](Self::save).
    pub async fn set<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), Error> {
        self.translate.set(db, name, value).await
    }

    /// Whether attribute `name` holds an unsaved value.
    ///
    /// Columns of the post itself are checked first, then the translated attributes of the
    /// current language.
    pub async fn is_attribute_changed<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<bool, Error> {
        if let Some(column) = entity::post::Column::iter().find(|column| column.as_str() == name) {
            return Ok(self.model.get(column).is_set());
        }

        self.translate.is_attribute_changed(db, name).await
    }

    /// Whether a stored translation exists for `language` (default: the current language).
    pub async fn has_translate<C: ConnectionTrait>(
        &mut self,
        db: &C,
        language: Option<&str>,
    ) -> Result<bool, Error> {
        self.translate.has_translate(db, language).await
    }

    /// Inserts or updates the post, then stores its current language translation.
    ///
    /// Pass a transaction as `db` to write both in one unit.
    pub async fn save<C: ConnectionTrait>(&mut self, db: &C) -> Result<(), Error> {
        let now = Utc::now().naive_utc();

        if self.is_new_record() {
            self.model.created_at = ActiveValue::Set(now);
            self.model.updated_at = ActiveValue::Set(now);

            let model = self.model.clone().insert(db).await?;
            tracing::debug!("Inserted post {}", model.id);

            self.model = model.into_active_model();
        } else if self.model.is_changed() {
            self.model.updated_at = ActiveValue::Set(now);

            let model = self.model.clone().update(db).await?;
            self.model = model.into_active_model();
        }

        let id = self.id().ok_or(Error::ParentNotSaved)?;
        self.translate.after_save(db, id).await
    }

    /// Deletes every translation of the post, then the post itself.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of post rows deleted, `0` for a post that was never saved
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete<C: ConnectionTrait>(mut self, db: &C) -> Result<u64, Error> {
        let Some(id) = self.id() else {
            return Ok(0);
        };

        self.translate.before_delete(db).await?;

        let result = entity::prelude::Post::delete_by_id(id).exec(db).await?;

        Ok(result.rows_affected)
    }

    /// Refetches the post row and drops every cached translation.
    ///
    /// # Returns
    /// - `Ok(true)` - Post reloaded
    /// - `Ok(false)` - Post is not saved or no longer exists
    pub async fn reload<C: ConnectionTrait>(&mut self, db: &C) -> Result<bool, Error> {
        let Some(id) = self.id() else {
            return Ok(false);
        };

        let Some(model) = entity::prelude::Post::find_by_id(id).one(db).await? else {
            return Ok(false);
        };

        self.model = model.into_active_model();
        self.translate.invalidate();

        Ok(true)
    }

    /// Renders the post in its current language.
    pub async fn to_dto<C: ConnectionTrait>(&mut self, db: &C) -> Result<PostDto, Error> {
        let id = self.id().ok_or(Error::ParentNotSaved)?;
        let title = self.get_string(db, "title_lang").await?;
        let description = self.get_string(db, "description").await?;

        Ok(PostDto {
            id,
            status_id: self.status_id().unwrap_or_default(),
            language: self.language().to_string(),
            title,
            description,
            created_at: self.model.created_at.try_as_ref().copied().unwrap_or_default(),
            updated_at: self.model.updated_at.try_as_ref().copied().unwrap_or_default(),
        })
    }
}
