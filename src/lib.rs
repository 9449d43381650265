//! Per-language translated attributes for SeaORM records.
//!
//! A translated record keeps some of its attributes in a child table holding one row per
//! language. See [`translate`] for the building blocks and [`record::post`] for a record
//! wired up with them.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod record;
pub mod translate;
