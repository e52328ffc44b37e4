//! Database client trait and adapter implementations.
//!
//! The trait is object-safe so the enumeration layer can hold a
//! `&dyn DatabaseClient` and tests can substitute an in-memory double
//! for the real driver.

use async_trait::async_trait;

use crate::error::{Result, RiskPocError};

pub mod clickhouse;

pub use self::clickhouse::ClickHouseAdapter;

/// Handle to an established database session.
///
/// Metadata queries return rows whose first column is the value of
/// interest, so the interface collapses to "run a query, get one string
/// per row". Any conforming driver satisfies the layers above it.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes `sql` and returns the first column of every result row.
    ///
    /// An empty result set is a normal outcome, not an error.
    async fn query_strings(&self, sql: &str) -> Result<Vec<String>>;

    /// Executes a probe query expected to return exactly one value.
    async fn query_scalar(&self, sql: &str) -> Result<String> {
        self.query_strings(sql)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RiskPocError::query_execution("probe query returned no rows"))
    }
}
