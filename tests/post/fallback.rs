//! Tests for reading translated attributes with source language fallback.

use super::*;

/// Tests reading a post in a language it is translated into.
///
/// Expected: the stored translation of that language
#[tokio::test]
async fn reads_current_language_translation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_mock_post(1, 1)
        .with_mock_translation(1, "en", "title A", "description A")
        .with_mock_translation(1, "ru", "заголовок А", "описание А")
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("ru-RU"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();

    assert_eq!(
        post.get_string(&test.db, "title_lang").await.unwrap(),
        Some("заголовок А".to_string())
    );
    assert_eq!(
        post.get_string(&test.db, "description").await.unwrap(),
        Some("описание А".to_string())
    );

    Ok(())
}

/// Tests switching a post to a language it is not translated into.
///
/// Expected: source language values, no stored translation until the post is saved
#[tokio::test]
async fn falls_back_to_source_until_saved() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_mock_post(1, 1)
        .with_mock_translation(1, "en", "title A", "description A")
        .with_mock_translation(1, "ru", "заголовок А", "описание А")
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("ru-RU"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();
    assert!(post.has_translate(&test.db, Some("ru")).await.unwrap());

    post.set_language("fr-FR");

    assert_eq!(
        post.get_string(&test.db, "title_lang").await.unwrap(),
        Some("title A".to_string())
    );
    assert!(!post.has_translate(&test.db, Some("fr")).await.unwrap());
    assert!(!post.has_translate(&test.db, None).await.unwrap());

    post.save(&test.db).await.unwrap();

    assert!(post.has_translate(&test.db, Some("fr")).await.unwrap());
    assert_eq!(test.post().count_translations(1).await?, 3);

    Ok(())
}

/// Tests reading a post that has no translation in either language.
///
/// Expected: Ok(None) for every translated attribute
#[tokio::test]
async fn reads_nothing_without_translations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_mock_post(1, 1)
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("ru-RU"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();

    assert_eq!(post.get(&test.db, "title_lang").await.unwrap(), None);
    assert_eq!(post.get_string(&test.db, "description").await.unwrap(), None);

    Ok(())
}

/// Tests rendering a post into its transfer object.
///
/// Expected: translated fields of the current language in the serialized output
#[tokio::test]
async fn renders_current_language() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("ru-RU"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();

    let dto = post.to_dto(&test.db).await.unwrap();
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["language"], "ru");
    assert_eq!(json["title"], "заголовок первой страницы");
    assert_eq!(json["description"], "описание первого поста");

    Ok(())
}
