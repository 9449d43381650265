//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the crate, so signatures don't need to reach into the generated `entity`
//! crate directly.

/// Type alias for language database model.
///
/// # Fields (from `entity::lang::Model`)
/// - `id` - Primary key, two character language code
/// - `locale` - Full locale, e.g. `en-US`
/// - `name` - Unique display name
/// - `status` - [`entity::lang::STATUS_ACTIVE`] or [`entity::lang::STATUS_DISABLED`]
pub type LangModel = entity::lang::Model;

/// Type alias for post database model.
pub type PostModel = entity::post::Model;

/// Type alias for post translation database model.
///
/// One row per post and language, identified by `(post_id, lang_id)`.
pub type PostLangModel = entity::post_lang::Model;
