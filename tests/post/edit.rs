//! Tests for editing translated attributes of stored posts.

use super::*;

/// Tests editing a post in the source language.
///
/// Expected: the source translation row is updated, other rows are untouched
#[tokio::test]
async fn updates_source_translation() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();
    post.set(&test.db, "title_lang", "edited title").await.unwrap();
    post.save(&test.db).await.unwrap();

    assert_eq!(test.post().count_translations(1).await?, 2);

    let mut stored = post_repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(
        stored.get_string(&test.db, "title_lang").await.unwrap(),
        Some("edited title".to_string())
    );

    stored.set_language("ru-RU");
    assert_eq!(
        stored.get_string(&test.db, "title_lang").await.unwrap(),
        Some("заголовок первой страницы".to_string())
    );

    Ok(())
}

/// Tests editing a post in a language it is not translated into.
///
/// Expected: a new translation row seeded from the source language, source row untouched
#[tokio::test]
async fn inserts_new_translation() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("de-DE"));
    let mut post = post_repo.get_by_id(2).await.unwrap().unwrap();
    post.set(&test.db, "title_lang", "Titel des zweiten Beitrags")
        .await
        .unwrap();
    post.save(&test.db).await.unwrap();

    assert_eq!(test.post().count_translations(2).await?, 2);

    let mut stored = post_repo.get_by_id(2).await.unwrap().unwrap();
    assert_eq!(
        stored.get_string(&test.db, "title_lang").await.unwrap(),
        Some("Titel des zweiten Beitrags".to_string())
    );
    assert_eq!(
        stored.get_string(&test.db, "description").await.unwrap(),
        Some("description of the second post".to_string())
    );

    let source_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut source = source_repo.get_by_id(2).await.unwrap().unwrap();
    assert_eq!(
        source.get_string(&test.db, "title_lang").await.unwrap(),
        Some("title of the second post".to_string())
    );

    Ok(())
}

/// Tests editing an existing translation of a post.
///
/// Expected: the translation row is updated in place
#[tokio::test]
async fn updates_existing_translation() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("ru-RU"));
    let mut post = post_repo.get_by_id_with_translations(1).await.unwrap().unwrap();
    post.set(&test.db, "description", "новое описание").await.unwrap();
    post.save(&test.db).await.unwrap();

    assert_eq!(test.post().count_translations(1).await?, 2);

    let mut stored = post_repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(
        stored.get_string(&test.db, "description").await.unwrap(),
        Some("новое описание".to_string())
    );
    assert_eq!(
        stored.get_string(&test.db, "title_lang").await.unwrap(),
        Some("заголовок первой страницы".to_string())
    );

    Ok(())
}

/// Tests adding a translation in another language without switching the post to it.
///
/// Expected: the translation is stored, the current language is unchanged
#[tokio::test]
async fn adds_translation_in_other_language() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id(2).await.unwrap().unwrap();

    post.translate_mut()
        .translation(&test.db, Some("ru"))
        .await
        .unwrap()
        .set(
            entity::post_lang::Column::Title,
            Some("заголовок второй страницы".to_string()).into(),
        )
        .unwrap();
    post.translate_mut()
        .save_translation(&test.db, "ru")
        .await
        .unwrap();

    assert_eq!(post.language(), "en");
    assert_eq!(test.post().count_translations(2).await?, 2);
    assert!(post.has_translate(&test.db, Some("ru")).await.unwrap());

    Ok(())
}

/// Tests changing only a column of the post itself.
///
/// Expected: the post is updated, no translation row is written
#[tokio::test]
async fn updates_post_without_touching_translations() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();
    post.set_status_id(3);
    post.save(&test.db).await.unwrap();

    let stored = post_repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.status_id(), Some(3));
    assert_eq!(test.post().count_translations(1).await?, 2);

    Ok(())
}
