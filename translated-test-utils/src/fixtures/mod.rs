//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test execution
//! (Phase 2 of the test architecture):
//!
//! - `lang` - Language records
//! - `post` - Posts and their per-language translations

pub mod lang;
pub mod post;
