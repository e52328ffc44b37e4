//! Error types for riskpoc operations.
//!
//! Connection parameters carry credentials, so error construction keeps
//! them out of every message: the password is never part of any context
//! string, and `ConnectionConfig` redacts it from its own output.

use thiserror::Error;

/// Main error type for riskpoc operations.
#[derive(Debug, Error)]
pub enum RiskPocError {
    /// Connecting to the ClickHouse server failed
    #[error("Failed to connect to ClickHouse: {context}")]
    Connection {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A metadata or probe query failed
    #[error("Query failed: {context}")]
    Query {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Writing the report to the output sink failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with `RiskPocError`
pub type Result<T> = std::result::Result<T, RiskPocError>;

impl RiskPocError {
    /// Creates a connection error with context and the underlying cause.
    pub fn connection_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a query error carrying the driver failure as its source.
    pub fn query_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Query {
            context: context.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a query error with no underlying cause.
    pub fn query_execution(context: impl Into<String>) -> Self {
        Self::Query {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
