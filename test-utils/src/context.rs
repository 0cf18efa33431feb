use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// An isolated in-memory personnel database for one test.
///
/// SeaORM keeps a single connection for `sqlite::memory:`, so clones of `db` (for
/// example inside an `AppState`) all see the same data until the context is dropped.
#[derive(Default)]
pub struct TestContext {
    /// Populated by `TestBuilder::build()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    async fn connect(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db.as_ref().ok_or(TestError::NotConnected)
    }

    /// Creates tables from entity-derived statements, in order.
    pub(crate) async fn create_tables(
        &mut self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.connect().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Applies the production migrations instead of entity-derived tables.
    pub(crate) async fn run_migrations(&mut self) -> Result<(), TestError> {
        let db = self.connect().await?;

        Migrator::up(db, None).await?;

        Ok(())
    }
}
