//! Locale normalization and the current/source language pair.

use std::{fmt, sync::Arc};

use sea_orm::{sea_query::ValueType, Value};

/// Number of leading characters of a locale used as the language code by default.
pub const DEFAULT_CODE_LENGTH: usize = 2;

/// Rule turning a locale string (`en-US`) into the language code translation rows are keyed by.
#[derive(Clone)]
pub enum PrimaryLanguage {
    /// Keep the first `n` characters of the locale as-is.
    Prefix(usize),
    /// User supplied mapping, e.g. lowercasing so that `en-GB` becomes `en-gb`.
    ///
    /// The language column of the translation table must be wide enough for the codes this
    /// produces.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl PrimaryLanguage {
    pub fn custom<F>(rule: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(rule))
    }

    pub fn normalize(&self, locale: &str) -> String {
        match self {
            Self::Prefix(length) => locale.chars().take(*length).collect(),
            Self::Custom(rule) => rule(locale),
        }
    }
}

impl Default for PrimaryLanguage {
    fn default() -> Self {
        Self::Prefix(DEFAULT_CODE_LENGTH)
    }
}

impl fmt::Debug for PrimaryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(length) => f.debug_tuple("Prefix").field(length).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Language codes a translated record resolves against.
///
/// Reads and writes go to the row of the current language. When that row does not exist yet,
/// it is seeded from the row of the source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    current: String,
    source: String,
}

impl LocaleContext {
    pub fn new(current: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            source: source.into(),
        }
    }

    /// Builds the context from raw locales, normalizing both with `rule`.
    pub fn from_locales(language: &str, source_language: &str, rule: &PrimaryLanguage) -> Self {
        Self::new(rule.normalize(language), rule.normalize(source_language))
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_current(&mut self, language: impl Into<String>) {
        self.current = language.into();
    }

    pub fn set_source(&mut self, language: impl Into<String>) {
        self.source = language.into();
    }

    pub fn is_source_language(&self) -> bool {
        self.current == self.source
    }

    /// Current language followed by the source language, without repeats.
    pub fn languages(&self) -> Vec<String> {
        let mut languages = vec![self.current.clone()];
        if !self.is_source_language() {
            languages.push(self.source.clone());
        }
        languages
    }
}

/// Reads a language code out of a column value.
pub(crate) fn language_code(value: Value) -> Option<String> {
    <String as ValueType>::try_from(value).ok()
}
