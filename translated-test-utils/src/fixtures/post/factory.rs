//! Factory functions for generating mock post database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable
//! for unit tests.

use chrono::Utc;

use crate::model::{PostLangModel, PostModel};

/// Create a mock post database model for testing.
///
/// # Arguments
/// - `post_id` - Primary key of the post
/// - `status_id` - Status of the post
///
/// # Returns
/// - `PostModel` - A post model with test data
pub fn mock_post_model(post_id: i32, status_id: i32) -> PostModel {
    let now = Utc::now().naive_utc();
    PostModel {
        id: post_id,
        status_id,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock post translation database model for testing.
///
/// # Arguments
/// - `post_id` - The post the translation belongs to
/// - `lang_id` - Two character language code
/// - `title` - Translated title
/// - `description` - Translated description
///
/// # Returns
/// - `PostLangModel` - A translation model with test data
pub fn mock_post_lang_model(
    post_id: i32,
    lang_id: &str,
    title: &str,
    description: &str,
) -> PostLangModel {
    PostLangModel {
        post_id,
        lang_id: lang_id.to_string(),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
    }
}
