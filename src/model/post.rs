use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A post rendered in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i32,
    pub status_id: i32,
    /// Language code the translated fields were resolved for.
    pub language: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
