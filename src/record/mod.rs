//! Records with translated attributes.
//!
//! Each record pairs the active model of its own table with a
//! [`TranslationCoordinator`](crate::translate::TranslationCoordinator) and calls the
//! coordinator's hooks from its `save` and `delete`.

pub mod post;

pub use post::Post;
