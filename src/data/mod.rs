//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. [`post`] loads posts
//! as translated [`Post`](crate::record::Post) records with the translation relations
//! prefetched as requested; [`lang`] reads the language reference table.

pub mod lang;
pub mod post;
