//! Tests for attribute declarations and change tracking.

use translated::error::Error;

use super::*;

/// Tests change tracking of post columns and translated attributes.
///
/// Expected: false right after loading, true after a write with a different value
#[tokio::test]
async fn tracks_changed_attributes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();

    assert!(!post.is_attribute_changed(&test.db, "status_id").await.unwrap());
    assert!(!post.is_attribute_changed(&test.db, "title_lang").await.unwrap());

    post.set_status_id(1);
    post.set(&test.db, "title_lang", "title of the first post").await.unwrap();

    assert!(!post.is_attribute_changed(&test.db, "status_id").await.unwrap());
    assert!(!post.is_attribute_changed(&test.db, "title_lang").await.unwrap());

    post.set_status_id(2);
    post.set(&test.db, "title_lang", "another title").await.unwrap();

    assert!(post.is_attribute_changed(&test.db, "status_id").await.unwrap());
    assert!(post.is_attribute_changed(&test.db, "title_lang").await.unwrap());
    assert!(!post.is_attribute_changed(&test.db, "description").await.unwrap());

    post.save(&test.db).await.unwrap();

    assert!(!post.is_attribute_changed(&test.db, "status_id").await.unwrap());
    assert!(!post.is_attribute_changed(&test.db, "title_lang").await.unwrap());

    Ok(())
}

/// Tests access to a name that is neither a post column nor a translated attribute.
///
/// Expected: Err(Error::UnknownAttribute)
#[tokio::test]
async fn rejects_unknown_attribute() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();

    assert!(matches!(
        post.get(&test.db, "fff").await,
        Err(Error::UnknownAttribute(name)) if name == "fff"
    ));
    assert!(matches!(
        post.set(&test.db, "title", "value").await,
        Err(Error::UnknownAttribute(_))
    ));
    assert!(matches!(
        post.is_attribute_changed(&test.db, "fff").await,
        Err(Error::UnknownAttribute(_))
    ));

    Ok(())
}

/// Tests writing a value whose type does not fit the translated column.
///
/// Expected: Err(Error::DbErr), nothing stored on the next save
#[tokio::test]
async fn rejects_mismatched_value_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let mut post = post_repo.get_by_id(1).await.unwrap().unwrap();

    assert!(matches!(
        post.set(&test.db, "title_lang", 42).await,
        Err(Error::DbErr(_))
    ));

    post.save(&test.db).await.unwrap();

    let mut stored = post_repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(
        stored.get_string(&test.db, "title_lang").await.unwrap(),
        Some("title of the first post".to_string())
    );

    Ok(())
}

/// Tests the alias declared for the title column.
///
/// Expected: `title_lang` resolves to `title`, undeclared names resolve to nothing
#[tokio::test]
async fn resolves_attribute_aliases() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let post = post_repo.get_by_id(1).await.unwrap().unwrap();
    let translate = post.translate();

    assert!(translate.has_attribute("title_lang"));
    assert!(translate.has_attribute("description"));
    assert!(!translate.has_attribute("fff"));
    assert_eq!(translate.attribute_name("title_lang"), Some("title"));
    assert_eq!(translate.attribute_name("description"), Some("description"));
    assert_eq!(translate.attribute_name("fff"), None);

    Ok(())
}
