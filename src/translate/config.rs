//! Per record type translation settings.

use crate::{
    config::LocaleSettings,
    translate::{
        index::DuplicateLanguage,
        language::{LocaleContext, PrimaryLanguage},
        proxy::AttributeProxy,
        TranslationEntity,
    },
};

/// Translation settings shared by every instance of one translated record type.
///
/// Built once per record type and handed to instances behind an `Arc`. The default locale is
/// derived from the process-wide [`LocaleSettings`] through the primary language rule; each
/// instance may switch away from it afterwards.
pub struct TranslateConfig<T: TranslationEntity> {
    attributes: AttributeProxy<T>,
    settings: LocaleSettings,
    primary_language: PrimaryLanguage,
    duplicate_language: DuplicateLanguage,
    locale: LocaleContext,
}

impl<T: TranslationEntity> TranslateConfig<T> {
    /// Creates a configuration using the default two character language codes.
    ///
    /// # Arguments
    /// - `attributes` - Translated attributes exposed by the record
    /// - `settings` - Process-wide current and source locales
    pub fn new(attributes: AttributeProxy<T>, settings: &LocaleSettings) -> Self {
        let primary_language = PrimaryLanguage::default();
        let locale = LocaleContext::from_locales(
            &settings.language,
            &settings.source_language,
            &primary_language,
        );

        Self {
            attributes,
            settings: settings.clone(),
            primary_language,
            duplicate_language: DuplicateLanguage::default(),
            locale,
        }
    }

    /// Replaces the rule turning locales into language codes, re-deriving the default locale.
    pub fn primary_language(mut self, rule: PrimaryLanguage) -> Self {
        self.locale = LocaleContext::from_locales(
            &self.settings.language,
            &self.settings.source_language,
            &rule,
        );
        self.primary_language = rule;
        self
    }

    /// Sets how loading handles two stored rows with the same language code.
    pub fn duplicate_language(mut self, policy: DuplicateLanguage) -> Self {
        self.duplicate_language = policy;
        self
    }

    pub fn attributes(&self) -> &AttributeProxy<T> {
        &self.attributes
    }

    /// Default locale new instances start with.
    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    pub fn duplicate_policy(&self) -> DuplicateLanguage {
        self.duplicate_language
    }

    /// Turns a locale into the language code rows are keyed by.
    pub fn normalize(&self, locale: &str) -> String {
        self.primary_language.normalize(locale)
    }
}
