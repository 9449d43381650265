//! Tests for keying translations by a custom primary language rule.

use translated::record::Post;

use super::*;

/// Tests storing translations under full lowercase locales.
///
/// Expected: `en-us` and `en-gb` rows, each read back with its own locale
#[tokio::test]
async fn stores_translations_per_locale() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_post_tables().build().await?;

    let mut post = Post::new(lowercase_post_config("en-US"), 1);
    assert_eq!(post.language(), "en-us");
    assert!(post.translate().is_source_language());

    post.set(&test.db, "title_lang", "American title").await.unwrap();
    post.save(&test.db).await.unwrap();

    post.set_language("en-GB");
    assert_eq!(post.language(), "en-gb");
    assert_eq!(
        post.get_string(&test.db, "title_lang").await.unwrap(),
        Some("American title".to_string())
    );
    post.set(&test.db, "title_lang", "British title").await.unwrap();
    post.save(&test.db).await.unwrap();

    let id = post.id().unwrap();
    assert_eq!(test.post().count_translations(id).await?, 2);

    let us_repo = PostRepository::new(&test.db, lowercase_post_config("en-US"));
    let mut us_post = us_repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(
        us_post.get_string(&test.db, "title_lang").await.unwrap(),
        Some("American title".to_string())
    );

    let gb_repo = PostRepository::new(&test.db, lowercase_post_config("en-GB"));
    let mut gb_post = gb_repo.get_by_id(id).await.unwrap().unwrap();
    assert!(gb_post.has_translate(&test.db, Some("en-gb")).await.unwrap());
    assert_eq!(
        gb_post.get_string(&test.db, "title_lang").await.unwrap(),
        Some("British title".to_string())
    );

    Ok(())
}
