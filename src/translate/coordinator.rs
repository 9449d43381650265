//! Per-instance translation state of a translated record.
//!
//! A record owns one [`TranslationCoordinator`] and forwards translated attribute access and
//! its save/delete lifecycle to it. The coordinator keeps the translation rows of its record in
//! a [`TranslationIndex`] which is built once, either from rows the caller already loaded or
//! from a single query on first use. Attribute writes never clear that cache; only
//! [`TranslationCoordinator::invalidate`] and deleting the record do.

use std::sync::Arc;

use sea_orm::{
    sea_query::ValueType, ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, IntoActiveModel,
    Value,
};

use crate::{
    error::Error,
    translate::{
        config::TranslateConfig,
        hooks,
        index::{TranslationIndex, TranslationRecord},
        language::{language_code, LocaleContext},
        relation, resolver, TranslationEntity,
    },
};

/// Languages whose stored rows are known to be in the index.
#[derive(Debug, Clone)]
enum Coverage {
    /// Every stored row was loaded.
    All,
    /// Only rows of these languages were loaded, e.g. by a current translation prefetch.
    Languages(Vec<String>),
}

/// Translation state of one translated record instance.
pub struct TranslationCoordinator<T: TranslationEntity> {
    config: Arc<TranslateConfig<T>>,
    locale: LocaleContext,
    parent_key: Option<T::ParentKey>,
    index: Option<TranslationIndex<T::ActiveModel>>,
    coverage: Coverage,
    has_translate: Option<Vec<String>>,
}

impl<T> TranslationCoordinator<T>
where
    T: TranslationEntity,
    T::ActiveModel: ActiveModelTrait<Entity = T> + ActiveModelBehavior + Send + Sync,
    T::Model: IntoActiveModel<T::ActiveModel> + Send + Sync,
{
    /// Creates the state of a record that has not been inserted yet.
    ///
    /// Such a record has no stored translations, so nothing is ever queried for it until
    /// [`after_save`](Self::after_save) assigns its key.
    pub fn new(config: Arc<TranslateConfig<T>>) -> Self {
        let locale = config.locale().clone();

        Self {
            config,
            locale,
            parent_key: None,
            index: Some(TranslationIndex::new()),
            coverage: Coverage::All,
            has_translate: Some(Vec::new()),
        }
    }

    /// Creates the state of a stored record whose translations are fetched on first use.
    pub fn for_parent(config: Arc<TranslateConfig<T>>, parent_key: T::ParentKey) -> Self {
        let locale = config.locale().clone();

        Self {
            config,
            locale,
            parent_key: Some(parent_key),
            index: None,
            coverage: Coverage::All,
            has_translate: None,
        }
    }

    /// Creates the state of a stored record from all of its eagerly loaded translation rows.
    ///
    /// # Returns
    /// - `Ok(TranslationCoordinator)` - Rows indexed by language
    /// - `Err(Error::DuplicateLanguage)` - Two rows share a language under the reject policy
    pub fn with_translations(
        config: Arc<TranslateConfig<T>>,
        parent_key: T::ParentKey,
        translations: Vec<T::Model>,
    ) -> Result<Self, Error> {
        let mut coordinator = Self::for_parent(config, parent_key);
        coordinator.index = Some(coordinator.build_index(translations)?);
        coordinator.coverage = Coverage::All;

        Ok(coordinator)
    }

    /// Creates the state of a stored record from its prefetched current and source language
    /// rows (see [`relation::current_translate`]).
    ///
    /// Rows of other languages are fetched individually if the record later resolves them.
    pub fn with_current_translate(
        config: Arc<TranslateConfig<T>>,
        parent_key: T::ParentKey,
        translations: Vec<T::Model>,
    ) -> Result<Self, Error> {
        let mut coordinator = Self::for_parent(config, parent_key);
        coordinator.index = Some(coordinator.build_index(translations)?);
        coordinator.coverage = Coverage::Languages(coordinator.locale.languages());

        Ok(coordinator)
    }

    /// Seeds the existence cache behind [`has_translate`](Self::has_translate) with prefetched
    /// language codes (see [`relation::has_translate_many`]).
    pub fn with_has_translate(mut self, languages: Vec<String>) -> Self {
        self.has_translate = Some(languages);
        self
    }

    fn build_index(
        &self,
        translations: Vec<T::Model>,
    ) -> Result<TranslationIndex<T::ActiveModel>, Error> {
        let index = TranslationIndex::build(
            translations
                .into_iter()
                .map(|model| TranslationRecord::loaded(model.into_active_model())),
            language_of::<T>,
            self.config.duplicate_policy(),
        )?;

        tracing::debug!(
            "Indexed {} translation(s) of {:?}",
            index.len(),
            self.parent_key
        );

        Ok(index)
    }

    pub fn config(&self) -> &TranslateConfig<T> {
        &self.config
    }

    pub fn parent_key(&self) -> Option<&T::ParentKey> {
        self.parent_key.as_ref()
    }

    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    /// Replaces the current and source language codes of this instance.
    pub fn set_locale(&mut self, locale: LocaleContext) {
        self.locale = locale;
    }

    /// Current language code.
    pub fn language(&self) -> &str {
        self.locale.current()
    }

    /// Switches this instance to `locale`, normalized with the configured primary language rule.
    pub fn set_language(&mut self, locale: &str) {
        let language = self.config.normalize(locale);
        self.locale.set_current(language);
    }

    pub fn source_language(&self) -> &str {
        self.locale.source()
    }

    pub fn set_source_language(&mut self, locale: &str) {
        let language = self.config.normalize(locale);
        self.locale.set_source(language);
    }

    pub fn is_source_language(&self) -> bool {
        self.locale.is_source_language()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.config.attributes().has_attribute(name)
    }

    /// Column name behind the translated attribute `alias`.
    pub fn attribute_name(&self, alias: &str) -> Option<&'static str> {
        self.config.attributes().attribute_name(alias)
    }

    /// Translations held in memory, `None` before they are loaded.
    pub fn index(&self) -> Option<&TranslationIndex<T::ActiveModel>> {
        self.index.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    /// Drops every cached row so the next access reloads from the store.
    ///
    /// Unsaved changes to translations are discarded.
    pub fn invalidate(&mut self) {
        match self.parent_key {
            Some(_) => {
                self.index = None;
                self.has_translate = None;
            }
            None => {
                self.index = Some(TranslationIndex::new());
                self.has_translate = Some(Vec::new());
            }
        }
        self.coverage = Coverage::All;
    }

    /// Makes sure the index holds the stored rows of `languages`.
    async fn load<C: ConnectionTrait>(&mut self, db: &C, languages: &[&str]) -> Result<(), Error> {
        let Some(parent_key) = self.parent_key.clone() else {
            if self.index.is_none() {
                self.index = Some(TranslationIndex::new());
            }
            return Ok(());
        };

        if self.index.is_none() {
            let models = relation::translations::<T, C>(db, &parent_key).await?;
            self.index = Some(self.build_index(models)?);
            self.coverage = Coverage::All;
            return Ok(());
        }

        let missing: Vec<String> = match &self.coverage {
            Coverage::All => return Ok(()),
            Coverage::Languages(covered) => languages
                .iter()
                .filter(|language| !covered.iter().any(|code| code == *language))
                .map(|language| language.to_string())
                .collect(),
        };
        if missing.is_empty() {
            return Ok(());
        }

        let models = relation::translations_in::<T, C>(db, &parent_key, &missing).await?;
        let loaded = self.build_index(models)?;
        let index = self.index.get_or_insert_with(TranslationIndex::new);
        for (language, record) in loaded.iter() {
            if !index.contains(language) {
                index.insert(language.to_string(), record.clone());
            }
        }

        if let Coverage::Languages(covered) = &mut self.coverage {
            covered.extend(missing);
        }

        Ok(())
    }

    /// Returns the translation for `language` (default: the current language), creating an
    /// unsaved one seeded from the source language when none is stored.
    pub async fn translation<C: ConnectionTrait>(
        &mut self,
        db: &C,
        language: Option<&str>,
    ) -> Result<&mut TranslationRecord<T::ActiveModel>, Error> {
        let language = language.unwrap_or(self.locale.current()).to_string();
        let source = self.locale.source().to_string();

        self.load(db, &[language.as_str(), source.as_str()]).await?;

        let index = self.index.get_or_insert_with(TranslationIndex::new);
        Ok(resolver::resolve::<T, _>(
            index,
            &language,
            &source,
            <T::ActiveModel as ActiveModelTrait>::default,
        ))
    }

    /// Reads translated attribute `name` in the current language.
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - Attribute value of the resolved translation
    /// - `Ok(None)` - The resolved translation never had the attribute assigned
    /// - `Err(Error::UnknownAttribute)` - `name` is not a translated attribute
    /// - `Err(Error::DbErr)` - Loading the translations failed
    pub async fn get<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<Option<Value>, Error> {
        let config = Arc::clone(&self.config);
        config.attributes().column(name)?;

        let record = self.translation(db, None).await?;
        config.attributes().read(record, name)
    }

    /// Reads translated attribute `name` converted to `V`.
    ///
    /// Unassigned, null and non-convertible values all read as `None`.
    pub async fn get_as<V, C>(&mut self, db: &C, name: &str) -> Result<Option<V>, Error>
    where
        V: ValueType,
        C: ConnectionTrait,
    {
        Ok(self
            .get(db, name)
            .await?
            .and_then(|value| V::try_from(value).ok()))
    }

    /// Writes translated attribute `name` in the current language.
    pub async fn set<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), Error> {
        let config = Arc::clone(&self.config);
        config.attributes().column(name)?;

        let record = self.translation(db, None).await?;
        config.attributes().write(record, name, value.into())
    }

    /// Whether translated attribute `name` of the current language holds an unsaved value.
    pub async fn is_attribute_changed<C: ConnectionTrait>(
        &mut self,
        db: &C,
        name: &str,
    ) -> Result<bool, Error> {
        let config = Arc::clone(&self.config);
        config.attributes().column(name)?;

        let record = self.translation(db, None).await?;
        config.attributes().is_changed(record, name)
    }

    /// Language codes of the stored translations, fetched once through the existence projection.
    pub async fn translated_languages<C: ConnectionTrait>(
        &mut self,
        db: &C,
    ) -> Result<&[String], Error> {
        if self.has_translate.is_none() {
            let languages = match &self.parent_key {
                Some(parent_key) => relation::has_translate::<T, C>(db, parent_key).await?,
                None => Vec::new(),
            };
            self.has_translate = Some(languages);
        }

        Ok(self.has_translate.as_deref().unwrap_or_default())
    }

    /// Whether a stored translation exists for `language` (default: the current language).
    ///
    /// Translations that were created in memory but not saved yet do not count.
    pub async fn has_translate<C: ConnectionTrait>(
        &mut self,
        db: &C,
        language: Option<&str>,
    ) -> Result<bool, Error> {
        let language = language.unwrap_or(self.locale.current()).to_string();

        Ok(self
            .translated_languages(db)
            .await?
            .iter()
            .any(|code| *code == language))
    }

    /// Whether a stored translation exists for the current language.
    pub async fn is_translated<C: ConnectionTrait>(&mut self, db: &C) -> Result<bool, Error> {
        self.has_translate(db, None).await
    }

    /// Writes the translation for `language` to the store right away.
    ///
    /// # Returns
    /// - `Ok(())` - Translation inserted or updated
    /// - `Err(Error::ParentNotSaved)` - The record has no key yet
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn save_translation<C: ConnectionTrait>(
        &mut self,
        db: &C,
        language: &str,
    ) -> Result<(), Error> {
        let parent_key = self.parent_key.clone().ok_or(Error::ParentNotSaved)?;

        let record = self.translation(db, Some(language)).await?;
        hooks::link::<T, C>(db, record, &parent_key).await?;
        self.mark_translated(language);

        Ok(())
    }

    /// Links the current language translation to the record saved under `parent_key`.
    ///
    /// Called by the owning record after each successful insert or update.
    pub async fn after_save<C: ConnectionTrait>(
        &mut self,
        db: &C,
        parent_key: T::ParentKey,
    ) -> Result<(), Error> {
        self.parent_key = Some(parent_key.clone());
        let language = self.locale.current().to_string();

        let record = self.translation(db, None).await?;
        hooks::link::<T, C>(db, record, &parent_key).await?;
        self.mark_translated(&language);

        tracing::debug!(
            "Linked {:?} translation to {:?}",
            language,
            parent_key
        );

        Ok(())
    }

    /// Deletes every stored translation of the record and detaches the cached rows.
    ///
    /// Called by the owning record before its own row is deleted.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of translation rows deleted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn before_delete<C: ConnectionTrait>(&mut self, db: &C) -> Result<u64, Error> {
        let Some(parent_key) = self.parent_key.take() else {
            return Ok(0);
        };

        let result = match hooks::unlink_all::<T, C>(db, &parent_key).await {
            Ok(result) => result,
            Err(err) => {
                self.parent_key = Some(parent_key);
                return Err(err);
            }
        };

        tracing::debug!(
            "Deleted {} translation(s) of {:?}",
            result.rows_affected,
            parent_key
        );

        self.invalidate();

        Ok(result.rows_affected)
    }

    fn mark_translated(&mut self, language: &str) {
        if let Some(languages) = &mut self.has_translate {
            if !languages.iter().any(|code| code == language) {
                languages.push(language.to_string());
            }
        }
    }
}

fn language_of<T>(record: &TranslationRecord<T::ActiveModel>) -> String
where
    T: TranslationEntity,
    T::ActiveModel: ActiveModelTrait<Entity = T>,
{
    record
        .get(T::language_column())
        .and_then(language_code)
        .unwrap_or_default()
}
