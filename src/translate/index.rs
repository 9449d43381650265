//! Loaded translation rows keyed by language code.

use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, Value};

use crate::error::Error;

/// Policy applied when two loaded rows carry the same language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateLanguage {
    /// Fail with [`Error::DuplicateLanguage`].
    #[default]
    Reject,
    /// Keep the position of the first row but the values of the last one.
    LastWins,
}

/// A translation row held in memory, either loaded from the store or not yet inserted.
#[derive(Debug, Clone)]
pub struct TranslationRecord<A> {
    model: A,
    persisted: bool,
}

impl<A: ActiveModelTrait> TranslationRecord<A> {
    /// Wraps a row that exists in the store.
    pub fn loaded(model: A) -> Self {
        Self {
            model,
            persisted: true,
        }
    }

    /// Wraps a row that has not been inserted yet.
    pub fn new(model: A) -> Self {
        Self {
            model,
            persisted: false,
        }
    }

    pub fn is_new_record(&self) -> bool {
        !self.persisted
    }

    pub fn model(&self) -> &A {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut A {
        &mut self.model
    }

    /// Returns the value of `column`, `None` when it was never assigned.
    pub fn get(&self, column: <A::Entity as EntityTrait>::Column) -> Option<Value> {
        self.model.get(column).into_value()
    }

    /// Assigns `value` to `column`.
    ///
    /// Assigning the value a loaded column already holds leaves it unchanged, so it is not
    /// reported as dirty and is not written back on update.
    ///
    /// # Returns
    /// - `Ok(())` - Value assigned, or already held
    /// - `Err(Error::DbErr)` - `value` does not fit the type of `column`
    pub fn set(
        &mut self,
        column: <A::Entity as EntityTrait>::Column,
        value: Value,
    ) -> Result<(), Error> {
        match self.model.get(column) {
            ActiveValue::Unchanged(current) | ActiveValue::Set(current) if current == value => {}
            _ => self.model.try_set(column, value)?,
        }

        Ok(())
    }

    /// Whether `column` holds a value that has not been written to the store.
    pub fn is_changed(&self, column: <A::Entity as EntityTrait>::Column) -> bool {
        self.model.get(column).is_set()
    }

    pub(crate) fn mark_persisted(&mut self, model: A) {
        self.model = model;
        self.persisted = true;
    }
}

/// Translation rows of one record keyed by language code, in first-seen order.
#[derive(Debug, Clone)]
pub struct TranslationIndex<A> {
    entries: Vec<(String, TranslationRecord<A>)>,
}

impl<A: ActiveModelTrait> TranslationIndex<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Indexes `records` by the language `language_of` reports for each of them.
    ///
    /// # Arguments
    /// - `records` - Rows in the order the store returned them
    /// - `language_of` - Extracts the language code of a row
    /// - `policy` - What to do when two rows share a language code
    ///
    /// # Returns
    /// - `Ok(TranslationIndex)` - Rows indexed in input order
    /// - `Err(Error::DuplicateLanguage)` - Two rows share a code and `policy` is
    ///   [`DuplicateLanguage::Reject`]
    pub fn build<I, F>(
        records: I,
        language_of: F,
        policy: DuplicateLanguage,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = TranslationRecord<A>>,
        F: Fn(&TranslationRecord<A>) -> String,
    {
        let mut index = Self::new();

        for record in records {
            let language = language_of(&record);

            match index.position(&language) {
                None => index.entries.push((language, record)),
                Some(position) => match policy {
                    DuplicateLanguage::Reject => return Err(Error::DuplicateLanguage { language }),
                    DuplicateLanguage::LastWins => {
                        tracing::warn!(
                            "Duplicate translation rows for language {:?}, keeping the last one",
                            language
                        );
                        index.entries[position].1 = record;
                    }
                },
            }
        }

        Ok(index)
    }

    fn position(&self, language: &str) -> Option<usize> {
        self.entries.iter().position(|(code, _)| code == language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.position(language).is_some()
    }

    pub fn get(&self, language: &str) -> Option<&TranslationRecord<A>> {
        self.entries
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, record)| record)
    }

    pub fn get_mut(&mut self, language: &str) -> Option<&mut TranslationRecord<A>> {
        self.entries
            .iter_mut()
            .find(|(code, _)| code == language)
            .map(|(_, record)| record)
    }

    /// Inserts `record` under `language`, replacing an existing entry in place.
    pub fn insert(
        &mut self,
        language: String,
        record: TranslationRecord<A>,
    ) -> &mut TranslationRecord<A> {
        let position = match self.position(&language) {
            Some(position) => {
                self.entries[position].1 = record;
                position
            }
            None => {
                self.entries.push((language, record));
                self.entries.len() - 1
            }
        };

        &mut self.entries[position].1
    }

    /// Returns the entry for `language`, inserting the record built by `create` first when
    /// there is none. `create` sees the index as it was before the insert.
    pub fn get_or_insert_with<F>(&mut self, language: &str, create: F) -> &mut TranslationRecord<A>
    where
        F: FnOnce(&Self) -> TranslationRecord<A>,
    {
        let position = match self.position(language) {
            Some(position) => position,
            None => {
                let record = create(self);
                self.entries.push((language.to_string(), record));
                self.entries.len() - 1
            }
        };

        &mut self.entries[position].1
    }

    /// Language codes in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationRecord<A>)> {
        self.entries
            .iter()
            .map(|(code, record)| (code.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: ActiveModelTrait> Default for TranslationIndex<A> {
    fn default() -> Self {
        Self::new()
    }
}
