use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// How the schema of a test database is produced.
enum SchemaSource {
    /// CREATE TABLE statements derived from entities, run in insertion order.
    Entities(Vec<TableCreateStatement>),
    /// The production migration set.
    Migrations,
}

/// Builder for in-memory personnel databases.
///
/// Repository tests usually add only the tables they touch; service and controller
/// tests add every table because a mutation also writes the activity log.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Soldier, Unit};
///
/// let test = TestBuilder::new()
///     .with_table(Unit)
///     .with_table(Soldier)
///     .build()
///     .await?;
/// let db = test.db.as_ref().unwrap();
/// ```
pub struct TestBuilder {
    schema: SchemaSource,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            schema: SchemaSource::Entities(Vec::new()),
        }
    }

    /// Adds the table of `entity`, including its unique columns.
    ///
    /// Ignored when `with_migrations()` was already selected.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        if let SchemaSource::Entities(tables) = &mut self.schema {
            tables.push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        }
        self
    }

    /// Adds every table of the personnel schema.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(Unit)
            .with_table(Soldier)
            .with_table(Notification)
            .with_table(ActivityLog)
    }

    /// Builds the schema by running the production migrations instead.
    ///
    /// Use this when the behaviour under test depends on what the migrations create,
    /// such as unique indexes.
    pub fn with_migrations(mut self) -> Self {
        self.schema = SchemaSource::Migrations;
        self
    }

    /// Connects to a fresh in-memory database and creates the configured schema.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the ready database
    /// - `Err(TestError::Database)` - Connecting, creating tables or migrating failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        match self.schema {
            SchemaSource::Entities(tables) => context.create_tables(tables).await?,
            SchemaSource::Migrations => context.run_migrations().await?,
        }

        Ok(context)
    }
}
