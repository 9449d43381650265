//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    constant::{FIXTURE_LANGS, FIXTURE_POSTS, FIXTURE_TRANSLATIONS},
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// mock fixtures. Methods can be chained together and finalized with `build()` to create
/// a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_post_tables: bool,

    // Database fixtures to insert
    langs: Vec<(String, String, String)>, // (id, locale, name)
    posts: Vec<(i32, i32)>,               // (post_id, status_id)
    translations: Vec<(i32, String, String, String)>, // (post_id, lang_id, title, description)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_post_tables: false,
            langs: Vec::new(),
            posts: Vec::new(),
            translations: Vec::new(),
        }
    }

    /// Add the language, post and post translation tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_post_tables(mut self) -> Self {
        self.include_post_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use translated_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), translated_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Post)
    ///     .with_table(PostLang)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active language into the database.
    ///
    /// # Arguments
    /// - `id` - Two character language code
    /// - `locale` - Full locale, e.g. `en-US`
    /// - `name` - Unique display name
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_lang(mut self, id: &str, locale: &str, name: &str) -> Self {
        self.langs
            .push((id.to_string(), locale.to_string(), name.to_string()));
        self
    }

    /// Insert a mock post into the database.
    ///
    /// # Arguments
    /// - `post_id` - Primary key of the post
    /// - `status_id` - Status of the post
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_post(mut self, post_id: i32, status_id: i32) -> Self {
        self.posts.push((post_id, status_id));
        self
    }

    /// Insert a mock post translation into the database.
    ///
    /// The post must be added via `with_mock_post` before calling this method.
    ///
    /// # Arguments
    /// - `post_id` - The post the translation belongs to
    /// - `lang_id` - Two character language code
    /// - `title` - Translated title
    /// - `description` - Translated description
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_translation(
        mut self,
        post_id: i32,
        lang_id: &str,
        title: &str,
        description: &str,
    ) -> Self {
        self.translations.push((
            post_id,
            lang_id.to_string(),
            title.to_string(),
            description.to_string(),
        ));
        self
    }

    /// Insert the standard fixture languages, posts and translations.
    ///
    /// Post 1 is translated into `en` and `ru`, post 2 only into `en`. See
    /// [`constant`](crate::constant) for the values.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_fixture_posts(mut self) -> Self {
        for (id, locale, name) in FIXTURE_LANGS {
            self = self.with_lang(id, locale, name);
        }
        for (post_id, status_id) in FIXTURE_POSTS {
            self = self.with_mock_post(*post_id, *status_id);
        }
        for (post_id, lang_id, title, description) in FIXTURE_TRANSLATIONS {
            self = self.with_mock_translation(*post_id, lang_id, title, description);
        }
        self
    }

    /// Build the test context.
    ///
    /// Creates the database tables first, then inserts fixtures in dependency order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_post_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Lang),
                schema.create_table_from_entity(entity::prelude::Post),
                schema.create_table_from_entity(entity::prelude::PostLang),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (id, locale, name) in self.langs {
            setup
                .lang()
                .insert_lang(&id, &locale, &name, entity::lang::STATUS_ACTIVE)
                .await?;
        }

        for (post_id, status_id) in self.posts {
            setup.post().insert_mock_post(post_id, status_id).await?;
        }

        for (post_id, lang_id, title, description) in self.translations {
            setup
                .post()
                .insert_translation(post_id, &lang_id, &title, &description)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
