//! Process-wide configuration.
//!
//! Values are read from the environment (after loading a `.env` file when one is present).
//! The locale settings are the defaults every translated record type starts from; they are
//! normalized into short language codes by each type's
//! [`TranslateConfig`](crate::translate::TranslateConfig).

use crate::error::config::ConfigError;

/// Locale used when neither `APP_LANGUAGE` nor `APP_SOURCE_LANGUAGE` is set.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct Config {
    pub database_url: String,
    pub locale: LocaleSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from the variables `lookup` returns.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A locale variable is set but blank
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            locale: LocaleSettings::from_lookup(lookup)?,
        })
    }
}

/// Raw locale strings of the running application, e.g. `ru-RU`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Locale requests are served in.
    pub language: String,
    /// Locale the original content is written in.
    pub source_language: String,
}

impl LocaleSettings {
    pub fn new(language: impl Into<String>, source_language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            source_language: source_language.into(),
        }
    }

    /// Reads `APP_LANGUAGE` and `APP_SOURCE_LANGUAGE`, falling back to [`DEFAULT_LOCALE`].
    ///
    /// # Returns
    /// - `Ok(LocaleSettings)` - Both locales resolved
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but blank
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`LocaleSettings::from_env`] with variables read through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            language: locale_var(&lookup, "APP_LANGUAGE")?,
            source_language: locale_var(&lookup, "APP_SOURCE_LANGUAGE")?,
        })
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DEFAULT_LOCALE)
    }
}

fn locale_var<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "locale must not be empty".to_string(),
        }),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(DEFAULT_LOCALE.to_string()),
    }
}
