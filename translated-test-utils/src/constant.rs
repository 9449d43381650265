//! Fixture data shared by the post tests.
//!
//! The first post is translated into English and Russian, the second one only into English.

/// `(post id, status id)` of the fixture posts, inserted in this order.
pub const FIXTURE_POSTS: &[(i32, i32)] = &[(1, 1), (2, 2)];

/// `(post id, language, title, description)` of the fixture translations.
pub const FIXTURE_TRANSLATIONS: &[(i32, &str, &str, &str)] = &[
    (1, "en", "title of the first post", "description of the first post"),
    (1, "ru", "заголовок первой страницы", "описание первого поста"),
    (2, "en", "title of the second post", "description of the second post"),
];

/// `(id, locale, name)` of the fixture languages, all active.
pub const FIXTURE_LANGS: &[(&str, &str, &str)] = &[("en", "en-US", "ENG"), ("ru", "ru-RU", "RUS")];
