//! ClickHouse adapter over the HTTP interface.
//!
//! ClickHouse exposes several interfaces; this adapter uses the HTTP one
//! (default port 8123) through the `clickhouse` driver crate. The driver
//! is lazy and opens no transport until the first query, so `connect`
//! issues a probe to surface connection and authentication failures
//! immediately.

use async_trait::async_trait;
use clickhouse::Client;
use tracing::{debug, error, info};

use super::DatabaseClient;
use crate::config::ConnectionConfig;
use crate::error::{Result, RiskPocError};

/// An established session against a ClickHouse server.
///
/// Owned by the caller that created it; the session ends when the adapter
/// is dropped. No pooling and no reuse across commands.
pub struct ClickHouseAdapter {
    client: Client,
    config: ConnectionConfig,
}

impl std::fmt::Debug for ClickHouseAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickHouseAdapter").finish_non_exhaustive()
    }
}

impl ClickHouseAdapter {
    /// Connects to the server described by `config`.
    ///
    /// Forwards host, port, database, username, and password to the
    /// driver, then probes with `SELECT 1`.
    ///
    /// # Errors
    /// Returns a configuration error for invalid parameters, or a
    /// connection error when the probe fails (server absent, network
    /// unreachable, authentication rejected).
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::default()
            .with_url(config.http_url())
            .with_database(config.database.clone())
            .with_user(config.username.clone())
            .with_password(config.password.clone());

        let adapter = Self {
            client,
            config: config.clone(),
        };

        match adapter.probe().await {
            Ok(()) => {
                info!(
                    "Successfully connected to ClickHouse at {}:{}",
                    adapter.config.host, adapter.config.port
                );
                Ok(adapter)
            }
            Err(e) => {
                error!("Failed to connect to ClickHouse: {e}");
                Err(RiskPocError::connection_failed(
                    format!("{}:{}", adapter.config.host, adapter.config.port),
                    e,
                ))
            }
        }
    }

    async fn probe(&self) -> std::result::Result<(), clickhouse::error::Error> {
        self.client.query("SELECT 1").fetch_one::<u8>().await?;
        Ok(())
    }

    /// Returns the server version string.
    pub async fn server_version(&self) -> Result<String> {
        self.query_scalar("SELECT version()").await
    }

    /// The configuration this session was opened with.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }
}

#[async_trait]
impl DatabaseClient for ClickHouseAdapter {
    async fn query_strings(&self, sql: &str) -> Result<Vec<String>> {
        debug!("Executing query: {sql}");
        self.client
            .query(sql)
            .fetch_all::<String>()
            .await
            .map_err(|e| RiskPocError::query_failed(sql.to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_config() {
        let config = ConnectionConfig::default().with_port(0);

        let err = ClickHouseAdapter::connect(&config).await.unwrap_err();
        assert!(matches!(err, RiskPocError::Configuration { .. }));
    }
}
