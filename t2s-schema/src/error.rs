use thiserror::Error;

/// Result type for schema introspection
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while reading schema metadata. All of them abort the read.
#[derive(Debug, Error)]
pub enum Error {
    /// The database could not be reached
    #[error("failed to connect to database")]
    Connect(#[source] sqlx::Error),

    /// The metadata query failed
    #[error("failed to query column metadata")]
    Query(#[source] sqlx::Error),

    /// A metadata row could not be decoded
    #[error("failed to decode column '{field}' of metadata row")]
    Decode {
        field: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Two tables share a name once the prefix is stripped
    #[error("tables '{first}' and '{second}' both map to '{name}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },
}
