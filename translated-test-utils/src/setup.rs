/// Build a `TestContext` with the given entity tables and no fixtures.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Lang)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
