//! Queries for translation rows.
//!
//! Besides plain fetches these cover the two read relations a translated record uses:
//! the existence projection behind `has_translate`, which only selects the foreign key and
//! language columns, and the current translation set, which restricts rows to the current and
//! source languages so a listing can prefetch exactly what it renders.

use sea_orm::{
    sea_query::ValueType, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityName, EntityTrait,
    JoinType, ModelTrait, QueryFilter, QuerySelect, Related, Select,
};

use crate::{
    error::Error,
    translate::{language::LocaleContext, TranslationEntity},
};

/// Fetches every translation row of one record, in store order.
pub async fn translations<T, C>(db: &C, parent_key: &T::ParentKey) -> Result<Vec<T::Model>, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    let models = T::find()
        .filter(T::foreign_key_column().eq(parent_key.clone()))
        .all(db)
        .await?;

    Ok(models)
}

/// Fetches the translation rows of one record in `languages`.
pub async fn translations_in<T, C>(
    db: &C,
    parent_key: &T::ParentKey,
    languages: &[String],
) -> Result<Vec<T::Model>, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    if languages.is_empty() {
        return Ok(Vec::new());
    }

    let models = T::find()
        .filter(T::foreign_key_column().eq(parent_key.clone()))
        .filter(T::language_column().is_in(languages.iter().cloned()))
        .all(db)
        .await?;

    Ok(models)
}

/// Fetches the rows of the current and source languages of one record.
pub async fn current_translate<T, C>(
    db: &C,
    parent_key: &T::ParentKey,
    locale: &LocaleContext,
) -> Result<Vec<T::Model>, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    translations_in::<T, C>(db, parent_key, &locale.languages()).await
}

/// Language codes of the stored translations of one record.
///
/// Only the foreign key and language columns are selected, no full rows are built.
pub async fn has_translate<T, C>(db: &C, parent_key: &T::ParentKey) -> Result<Vec<String>, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    let rows: Vec<(T::ParentKey, String)> = T::find()
        .select_only()
        .column(T::foreign_key_column())
        .column(T::language_column())
        .filter(T::foreign_key_column().eq(parent_key.clone()))
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|(_, language)| language).collect())
}

/// Language codes of the stored translations of many records, with one query.
///
/// # Returns
/// - `Ok(Vec<(ParentKey, Vec<String>)>)` - One entry per key in `parent_keys`, in the same order
/// - `Err(Error::DbErr)` - Database query failed
pub async fn has_translate_many<T, C>(
    db: &C,
    parent_keys: &[T::ParentKey],
) -> Result<Vec<(T::ParentKey, Vec<String>)>, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    if parent_keys.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<(T::ParentKey, String)> = T::find()
        .select_only()
        .column(T::foreign_key_column())
        .column(T::language_column())
        .filter(T::foreign_key_column().is_in(parent_keys.iter().cloned()))
        .into_tuple()
        .all(db)
        .await?;

    Ok(parent_keys
        .iter()
        .map(|key| {
            let languages = rows
                .iter()
                .filter(|(parent_key, _)| parent_key == key)
                .map(|(_, language)| language.clone())
                .collect();
            (key.clone(), languages)
        })
        .collect())
}

/// Fetches the current and source language rows of many records, with one query.
///
/// # Returns
/// - `Ok(Vec<(ParentKey, Vec<Model>)>)` - One entry per key in `parent_keys`, in the same order
/// - `Err(Error::DbErr)` - Database query failed or a foreign key could not be read
pub async fn current_translate_many<T, C>(
    db: &C,
    parent_keys: &[T::ParentKey],
    locale: &LocaleContext,
) -> Result<Vec<(T::ParentKey, Vec<T::Model>)>, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    if parent_keys.is_empty() {
        return Ok(Vec::new());
    }

    let models = T::find()
        .filter(T::foreign_key_column().is_in(parent_keys.iter().cloned()))
        .filter(T::language_column().is_in(locale.languages()))
        .all(db)
        .await?;

    group_by_parent::<T>(parent_keys, models)
}

/// Fetches all translation rows of many records, with one query.
pub async fn translations_many<T, C>(
    db: &C,
    parent_keys: &[T::ParentKey],
) -> Result<Vec<(T::ParentKey, Vec<T::Model>)>, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    if parent_keys.is_empty() {
        return Ok(Vec::new());
    }

    let models = T::find()
        .filter(T::foreign_key_column().is_in(parent_keys.iter().cloned()))
        .all(db)
        .await?;

    group_by_parent::<T>(parent_keys, models)
}

fn group_by_parent<T: TranslationEntity>(
    parent_keys: &[T::ParentKey],
    models: Vec<T::Model>,
) -> Result<Vec<(T::ParentKey, Vec<T::Model>)>, Error> {
    let mut groups: Vec<(T::ParentKey, Vec<T::Model>)> = parent_keys
        .iter()
        .map(|key| (key.clone(), Vec::new()))
        .collect();

    for model in models {
        let key = <T::ParentKey as ValueType>::try_from(model.get(T::foreign_key_column()))
            .map_err(|_| {
                DbErr::Type(format!(
                    "Failed to read the foreign key of a {} row",
                    T::default().table_name()
                ))
            })?;

        if let Some((_, group)) = groups.iter_mut().find(|(parent_key, _)| *parent_key == key) {
            group.push(model);
        }
    }

    Ok(groups)
}

/// Left joins the translation rows of the current and source languages onto `select`.
///
/// The language restriction is part of the join condition, so records without any of those
/// translations are still returned.
pub fn join_current_translate<P, T>(select: Select<P>, locale: &LocaleContext) -> Select<P>
where
    P: EntityTrait + Related<T>,
    T: TranslationEntity,
{
    let languages = locale.languages();
    let language_column = T::language_column();

    let relation = <P as Related<T>>::to().on_condition(move |_left, _right| {
        Condition::all().add(language_column.is_in(languages.clone()))
    });

    select.join(JoinType::LeftJoin, relation)
}
