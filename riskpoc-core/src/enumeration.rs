//! Table enumeration.
//!
//! Lists table names through an established session. Names come back in
//! server order; sorting happens only at render time.

use tracing::error;

use crate::adapters::DatabaseClient;
use crate::error::{Result, RiskPocError};

/// Lists the tables in `database`, or in the session's default database
/// when `database` is `None`.
///
/// An empty database yields an empty vector, not an error.
///
/// # Errors
/// Returns a configuration error when `database` is not a plain
/// identifier, or a query error when the session cannot execute the
/// metadata query.
pub async fn list_tables(
    client: &dyn DatabaseClient,
    database: Option<&str>,
) -> Result<Vec<String>> {
    let sql = match database {
        Some(db) => {
            validate_identifier(db)?;
            format!("SHOW TABLES FROM {db}")
        }
        None => "SHOW TABLES".to_string(),
    };

    match client.query_strings(&sql).await {
        Ok(tables) => Ok(tables),
        Err(e) => {
            error!("Error listing tables: {e}");
            Err(e)
        }
    }
}

/// Accepts plain ClickHouse identifiers only.
///
/// The database name is interpolated into `SHOW TABLES FROM`, so anything
/// outside `[A-Za-z_][A-Za-z0-9_]*` is rejected rather than quoted.
fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(RiskPocError::configuration(format!(
            "invalid database identifier: '{name}'"
        )))
    }
}
