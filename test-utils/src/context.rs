use std::path::PathBuf;

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::{error::TestError, factory::helpers::next_id};

/// Connections kept by a file-backed pool, enough for several writers to contend.
const FILE_POOL_CONNECTIONS: u32 = 8;

/// Test context containing the database connection for a single test.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing, or a pooled connection to a temporary database file when a test needs
/// transactions running side by side. The database is created lazily on first access
/// and persists for the lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to the test SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test.
    pub db: Option<DatabaseConnection>,

    /// Database file backing the pool, removed when the context is dropped.
    file: Option<PathBuf>,
}

impl TestContext {
    /// Creates a new empty test context backed by an in-memory database.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None, file: None }
    }

    /// Creates a new empty test context backed by a temporary database file.
    ///
    /// An in-memory SQLite database lives on a single connection, so concurrent
    /// transactions can only be exercised against a file shared by a pool.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn file_backed() -> Self {
        let file = std::env::temp_dir().join(format!(
            "frontdesk-test-{}-{}.db",
            std::process::id(),
            next_id()
        ));

        Self {
            db: None,
            file: Some(file),
        }
    }

    /// Gets or creates the test database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// connects to a new in-memory SQLite database, or to the context's database file
    /// through a pool, and stores the connection. The connection persists for the
    /// lifetime of this test context.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = match &self.file {
                    None => Database::connect("sqlite::memory:").await?,
                    Some(file) => {
                        let url = format!("sqlite://{}?mode=rwc", file.display());
                        let mut options = ConnectOptions::new(url);
                        options
                            .max_connections(FILE_POOL_CONNECTIONS)
                            .sqlx_logging(false);
                        Database::connect(options).await?
                    }
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each CREATE TABLE statement in sequence. Typically called internally by
    /// `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            // The file is only created once a connection was opened.
            let _ = std::fs::remove_file(file);
        }
    }
}
