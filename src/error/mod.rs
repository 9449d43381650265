//! Error types for the translation layer.
//!
//! Every fallible operation in this crate returns [`Error`]. Database failures are carried
//! through unchanged in [`Error::DbErr`] so a failed translation link or unlink surfaces as
//! the failure of the owning record's save or delete.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the translation layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Read or write of a name that is not declared as a translated attribute.
    #[error("Unknown translated attribute: {0:?}")]
    UnknownAttribute(String),
    /// Configuration maps an attribute onto a column the translation entity does not have.
    #[error("Translation entity {entity:?} has no column {column:?}")]
    UnknownColumn { entity: String, column: String },
    /// Two stored translation rows of one record share a language code.
    #[error("Duplicate translation rows for language {language:?}")]
    DuplicateLanguage { language: String },
    /// A translation was linked before its owning record had a primary key.
    #[error("Cannot link a translation before its owning record has been saved")]
    ParentNotSaved,
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
