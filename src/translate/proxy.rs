//! Declared translated attributes and their mapping onto translation columns.

use sea_orm::{ActiveModelTrait, EntityName, EntityTrait, IdenStatic, Iterable, Value};

use crate::{error::Error, translate::index::TranslationRecord};

/// Maps the attribute names a record exposes onto columns of its translation entity.
///
/// Attributes are declared either as plain column names or as `alias → column` pairs, which
/// lets the record expose e.g. `title_lang` for the `title` column.
pub struct AttributeProxy<T: EntityTrait> {
    attributes: Vec<(String, T::Column)>,
}

impl<T: EntityTrait> AttributeProxy<T> {
    /// Declares attributes from `alias → column name` pairs.
    ///
    /// # Returns
    /// - `Ok(AttributeProxy)` - Every column name exists on `T`
    /// - `Err(Error::UnknownColumn)` - A column name is not a column of `T`
    pub fn new<I, A, C>(attributes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: AsRef<str>,
    {
        let mut declared: Vec<(String, T::Column)> = Vec::new();

        for (alias, column_name) in attributes {
            let column = column_by_name::<T>(column_name.as_ref())?;
            let alias = alias.into();

            match declared.iter_mut().find(|(name, _)| *name == alias) {
                Some(entry) => entry.1 = column,
                None => declared.push((alias, column)),
            }
        }

        Ok(Self {
            attributes: declared,
        })
    }

    /// Declares attributes exposed under their own column names.
    pub fn from_columns<I, C>(columns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        Self::new(
            columns
                .into_iter()
                .map(|column| (column.as_ref().to_string(), column)),
        )
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(alias, _)| alias == name)
    }

    /// Returns the column name behind `alias`, `None` when it is not declared.
    pub fn attribute_name(&self, alias: &str) -> Option<&'static str> {
        self.find(alias).map(|column| column.as_str())
    }

    /// Declared `(alias, column name)` pairs in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.attributes
            .iter()
            .map(|(alias, column)| (alias.as_str(), column.as_str()))
    }

    /// Returns the column behind `name`.
    ///
    /// # Returns
    /// - `Ok(Column)` - `name` is declared
    /// - `Err(Error::UnknownAttribute)` - `name` is not a translated attribute
    pub fn column(&self, name: &str) -> Result<T::Column, Error> {
        self.find(name)
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
    }

    fn find(&self, alias: &str) -> Option<T::Column> {
        self.attributes
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, column)| *column)
    }

    /// Reads attribute `name` from `record`; `None` when the column was never assigned.
    pub fn read<A>(
        &self,
        record: &TranslationRecord<A>,
        name: &str,
    ) -> Result<Option<Value>, Error>
    where
        A: ActiveModelTrait<Entity = T>,
    {
        Ok(record.get(self.column(name)?))
    }

    /// Writes `value` to attribute `name` of `record`.
    ///
    /// # Returns
    /// - `Ok(())` - Value assigned
    /// - `Err(Error::UnknownAttribute)` - `name` is not a translated attribute
    /// - `Err(Error::DbErr)` - `value` does not fit the type of the column behind `name`
    pub fn write<A>(
        &self,
        record: &mut TranslationRecord<A>,
        name: &str,
        value: Value,
    ) -> Result<(), Error>
    where
        A: ActiveModelTrait<Entity = T>,
    {
        record.set(self.column(name)?, value)
    }

    pub fn is_changed<A>(&self, record: &TranslationRecord<A>, name: &str) -> Result<bool, Error>
    where
        A: ActiveModelTrait<Entity = T>,
    {
        Ok(record.is_changed(self.column(name)?))
    }
}

fn column_by_name<T: EntityTrait>(name: &str) -> Result<T::Column, Error> {
    T::Column::iter()
        .find(|column| column.as_str() == name)
        .ok_or_else(|| Error::UnknownColumn {
            entity: T::default().table_name().to_string(),
            column: name.to_string(),
        })
}
