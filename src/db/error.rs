use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DbError {
    #[error("failed to connect to the database: {0}")]
    Connection(#[source] mysql::Error),

    #[error("query failed: {0}")]
    Query(#[source] mysql::Error),

    #[error("not connected to the database")]
    NotConnected,
}
