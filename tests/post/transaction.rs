//! Tests for saving and deleting posts inside a caller's transaction.

use sea_orm::TransactionTrait;
use translated::record::Post;

use super::*;

/// Tests saving a new post inside a committed transaction.
///
/// Expected: the post and its translation are stored
#[tokio::test]
async fn commit_stores_post_and_translation() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_post_tables().build().await?;

    let mut post = Post::new(post_config("en-US"), 1);
    let txn = test.db.begin().await?;
    post.set(&txn, "title_lang", "title").await.unwrap();
    post.save(&txn).await.unwrap();
    txn.commit().await?;

    assert_eq!(test.post().count_translations(post.id().unwrap()).await?, 1);

    Ok(())
}

/// Tests saving a new post inside a rolled back transaction.
///
/// Expected: neither the post nor its translation is stored
#[tokio::test]
async fn rollback_discards_post_and_translation() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_post_tables().build().await?;

    let mut post = Post::new(post_config("en-US"), 1);
    let txn = test.db.begin().await?;
    post.set(&txn, "title_lang", "title").await.unwrap();
    post.save(&txn).await.unwrap();
    let id = post.id().unwrap();
    txn.rollback().await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    assert!(post_repo.get_by_id(id).await.unwrap().is_none());
    assert_eq!(test.post().count_translations(id).await?, 0);

    Ok(())
}

/// Tests deleting a post inside a rolled back transaction.
///
/// Expected: the post and its translations remain
#[tokio::test]
async fn rollback_keeps_deleted_translations() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_post_tables()
        .with_fixture_posts()
        .build()
        .await?;

    let post_repo = PostRepository::new(&test.db, post_config("en-US"));
    let post = post_repo.get_by_id(1).await.unwrap().unwrap();

    let txn = test.db.begin().await?;
    post.delete(&txn).await.unwrap();
    txn.rollback().await?;

    assert_eq!(test.post().count_translations(1).await?, 2);

    Ok(())
}
