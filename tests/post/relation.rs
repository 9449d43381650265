//! Tests for the prefetching relations of the post repository.

use super::*;

/// Tests rendering posts from the current translation prefetch.
///
/// Expected: every title is served from the prefetch, without the translation table
#[tokio::test]
async fn current_translate_is_served_from_prefetch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("ru-RU"));
    let mut posts = post_repo.get_all_with_current_translate().await.unwrap();

    // Any query would fail against a database without tables
    let empty = test_setup_with_tables!()?;
    let mut titles = Vec::new();
    for post in posts.iter_mut() {
        titles.push(post.get_string(&empty.db, "title_lang").await.unwrap());
    }

    assert_eq!(
        titles,
        vec![
            Some("заголовок первой страницы".to_string()),
            Some("title of the second post".to_string()),
        ]
    );

    Ok(())
}

/// Tests reading a post loaded with every translation.
///
/// Expected: switching languages is served from memory
#[tokio::test]
async fn translations_are_served_from_prefetch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id_with_translations(1).await.unwrap().unwrap();

    let empty = test_setup_with_tables!()?;
    assert_eq!(
        post.get_string(&empty.db, "title_lang").await.unwrap(),
        Some("title of the first post".to_string())
    );

    post.set_language("ru-RU");
    assert_eq!(
        post.get_string(&empty.db, "title_lang").await.unwrap(),
        Some("заголовок первой страницы".to_string())
    );

    Ok(())
}

/// Tests the existence relation of every post.
///
/// Expected: only stored translations are reported
#[tokio::test]
async fn has_translate_reports_stored_languages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("ru-RU"));
    let mut posts = post_repo.get_all_with_has_translate().await.unwrap();

    assert!(posts[0].has_translate(&test.db, None).await.unwrap());
    assert!(posts[0].has_translate(&test.db, Some("en")).await.unwrap());
    assert!(!posts[1].has_translate(&test.db, None).await.unwrap());
    assert!(!posts[1].has_translate(&test.db, Some("fr")).await.unwrap());

    Ok(())
}

/// Tests reloading a post after its translations changed in the store.
///
/// Expected: cached values until reload, stored values afterwards
#[tokio::test]
async fn reload_drops_cached_translations() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id(2).await.unwrap().unwrap();
    assert!(!post.has_translate(&test.db, Some("ru")).await.unwrap());

    test.post()
        .insert_translation(2, "ru", "заголовок второй страницы", "описание второго поста")
        .await?;
    assert!(!post.has_translate(&test.db, Some("ru")).await.unwrap());

    assert!(post.reload(&test.db).await.unwrap());

    assert!(post.has_translate(&test.db, Some("ru")).await.unwrap());

    Ok(())
}
