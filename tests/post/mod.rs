//! Tests for translated posts.
//!
//! These tests exercise [`Post`](translated::record::Post) end to end against an in-memory
//! database: resolving translations with source language fallback, storing translations on
//! save, removing them on delete, and the prefetching relations of the repository.

mod attribute;
mod edit;
mod fallback;
mod primary_language;
mod relation;
mod transaction;

use translated::data::post::PostRepository;
use translated_test_utils::prelude::*;

use crate::util::{lowercase_post_config, post_config};
