//! Per-language translation records for SeaORM entities.
//!
//! A translated record (e.g. a post) keeps some of its attributes in a child table with one
//! row per language (e.g. `post_lang`). The pieces in this module let the record read and
//! write those attributes as if they were its own:
//!
//! - [`index`] - Loaded translation rows keyed by language code
//! - [`resolver`] - Picks the row for a language, synthesizing one from the source language
//! - [`proxy`] - Maps declared attribute names onto translation columns
//! - [`hooks`] - Persists the active translation after save, removes all rows before delete
//! - [`language`] - Locale normalization and the current/source language pair
//! - [`relation`] - Queries for translation rows, existence projections and joins
//! - [`config`] - Per record type attributes, language rule and duplicate policy
//! - [`coordinator`] - Per-instance state tying the above together
//!
//! A translation entity opts in by implementing [`TranslationEntity`].

pub mod config;
pub mod coordinator;
pub mod hooks;
pub mod index;
pub mod language;
pub mod proxy;
pub mod relation;
pub mod resolver;

pub use config::TranslateConfig;
pub use coordinator::TranslationCoordinator;
pub use index::{DuplicateLanguage, TranslationIndex, TranslationRecord};
pub use language::{LocaleContext, PrimaryLanguage};
pub use proxy::AttributeProxy;

use std::fmt::Debug;

use sea_orm::{sea_query::ValueType, EntityTrait, TryGetable, Value};

/// Trait for entities that store per-language values of another entity.
///
/// The implementing entity is the child table (e.g. `post_lang`). Its rows are identified by
/// the owning record's key together with a language code, which must be unique per owner.
pub trait TranslationEntity: EntityTrait {
    /// Type of the foreign key column pointing at the owning record.
    type ParentKey: Into<Value> + ValueType + TryGetable + Clone + PartialEq + Debug + Send + Sync;

    /// Returns the column holding the owning record's primary key.
    fn foreign_key_column() -> Self::Column;

    /// Returns the column holding the short language code.
    fn language_column() -> Self::Column;
}
