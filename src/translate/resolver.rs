//! Selection of the translation row for a language.

use sea_orm::{ActiveModelTrait, IdenStatic, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait};

use crate::translate::{
    index::{TranslationIndex, TranslationRecord},
    TranslationEntity,
};

/// Returns the translation for `language`, creating it when the index has none.
///
/// A created translation starts from `factory`, receives a copy of every value of the
/// `source_language` row when that row is indexed, and gets `language` written to its language
/// column. It is then inserted into `index`, so resolving the same language again returns the
/// same record. Nothing is written to the store here.
///
/// # Arguments
/// - `index` - Loaded translations of one record
/// - `language` - Language code to resolve
/// - `source_language` - Language code whose row seeds new translations
/// - `factory` - Builds an empty translation row
pub fn resolve<'a, T, F>(
    index: &'a mut TranslationIndex<T::ActiveModel>,
    language: &str,
    source_language: &str,
    factory: F,
) -> &'a mut TranslationRecord<T::ActiveModel>
where
    T: TranslationEntity,
    T::ActiveModel: ActiveModelTrait<Entity = T>,
    F: FnOnce() -> T::ActiveModel,
{
    index.get_or_insert_with(language, |index| {
        let mut translation = TranslationRecord::new(factory());

        match index.get(source_language) {
            Some(source) => copy_values::<T>(source.model(), translation.model_mut()),
            None => tracing::debug!(
                "No {:?} translation to seed {:?} from, starting empty",
                source_language,
                language
            ),
        }

        translation
            .model_mut()
            .set(T::language_column(), language.to_string().into());

        translation
    })
}

/// Copies every assigned column of `source` onto `target`.
///
/// The language column is skipped since the caller assigns it, as are auto-increment primary
/// key columns, which the store assigns on insert.
fn copy_values<T>(source: &T::ActiveModel, target: &mut T::ActiveModel)
where
    T: TranslationEntity,
    T::ActiveModel: ActiveModelTrait<Entity = T>,
{
    let language_column = T::language_column().as_str();
    let generated_keys: Vec<&str> = if <T::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
        T::PrimaryKey::iter()
            .map(|key| key.into_column().as_str())
            .collect()
    } else {
        Vec::new()
    };

    for column in T::Column::iter() {
        let name = column.as_str();
        if name == language_column || generated_keys.contains(&name) {
            continue;
        }

        if let Some(value) = source.get(column).into_value() {
            target.set(column, value);
        }
    }
}
