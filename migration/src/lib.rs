pub use sea_orm_migration::prelude::*;

mod m20261017_000001_lang;
mod m20261017_000002_post;
mod m20261017_000003_post_lang;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_lang::Migration),
            Box::new(m20261017_000002_post::Migration),
            Box::new(m20261017_000003_post_lang::Migration),
        ]
    }
}
