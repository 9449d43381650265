//! Persistence of translation rows around the owning record's save and delete.
//!
//! These run from the owning record's own `save` and `delete` through the coordinator's
//! [`after_save`](crate::translate::TranslationCoordinator::after_save) and
//! [`before_delete`](crate::translate::TranslationCoordinator::before_delete).
//! Store errors are returned as-is; nothing is retried.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, Value,
};

use crate::{
    error::Error,
    translate::{index::TranslationRecord, TranslationEntity},
};

/// Links `record` to the record identified by `parent_key` and writes it to the store.
///
/// The foreign key column is set to `parent_key`, then the row is inserted when it is new or
/// updated when any of its columns changed. Must be called after the owning record was
/// inserted, once its key is known.
pub async fn link<T, C>(
    db: &C,
    record: &mut TranslationRecord<T::ActiveModel>,
    parent_key: &T::ParentKey,
) -> Result<(), Error>
where
    T: TranslationEntity,
    T::ActiveModel: ActiveModelTrait<Entity = T> + ActiveModelBehavior + Send + Sync,
    T::Model: IntoActiveModel<T::ActiveModel> + Send + Sync,
    C: ConnectionTrait,
{
    let key: Value = parent_key.clone().into();
    record.set(T::foreign_key_column(), key)?;

    if record.is_new_record() {
        let model = record.model().clone().insert(db).await?;
        record.mark_persisted(model.into_active_model());
    } else if record.model().is_changed() {
        let model = record.model().clone().update(db).await?;
        record.mark_persisted(model.into_active_model());
    }

    Ok(())
}

/// Deletes every translation row of the record identified by `parent_key`.
pub async fn unlink_all<T, C>(db: &C, parent_key: &T::ParentKey) -> Result<DeleteResult, Error>
where
    T: TranslationEntity,
    C: ConnectionTrait,
{
    let result = T::delete_many()
        .filter(T::foreign_key_column().eq(parent_key.clone()))
        .exec(db)
        .await?;

    Ok(result)
}
