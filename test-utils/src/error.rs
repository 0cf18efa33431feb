use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting, creating tables or migrating failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// A schema step ran before a connection was established.
    #[error("test database is not connected")]
    NotConnected,
}
