//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main translated crate to ensure consistency across tests.

/// Type alias for language database model.
pub type LangModel = entity::lang::Model;

/// Type alias for post database model.
pub type PostModel = entity::post::Model;

/// Type alias for post translation database model.
pub type PostLangModel = entity::post_lang::Model;
